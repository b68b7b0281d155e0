//! ClockView: maps a `core::ClockSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: title, boxed digital time with the plain time
//! underneath, analog dial, date, footer. The dial is dropped first when
//! the viewport is short; text lines are clipped, never wrapped.

use crate::core::{polar_offset, ClockSnapshot, DIAL_NUMERALS, HOUR_MARKERS};
use crate::fb::{text_width, CellStyle, FrameBuffer, Rgb};
use crate::types::{
    DIAL_ASPECT, DIAL_MAX_RADIUS, DIAL_MIN_RADIUS, HOUR_HAND_RATIO, MINUTE_HAND_RATIO,
    SECOND_HAND_RATIO,
};

const GOLD: Rgb = Rgb::new(253, 224, 71);
const RED: Rgb = Rgb::new(239, 68, 68);
const EMBLEM: Rgb = Rgb::new(110, 95, 30);

const TITLE: CellStyle = CellStyle::fg(GOLD).with_bold();
const TEXT: CellStyle = CellStyle::fg(GOLD);
const FAINT: CellStyle = CellStyle::fg(GOLD).with_dim();
const SECOND_HAND: CellStyle = CellStyle::fg(RED).with_bold();
const EMBLEM_STYLE: CellStyle = CellStyle::fg(EMBLEM).with_dim();

const TIME_SEPARATOR: &str = " : ";

/// Rows used by everything except the dial.
const TEXT_ROWS: u16 = 10;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Terminal renderer for the clock face.
#[derive(Debug, Clone)]
pub struct ClockView {
    show_dial: bool,
    anchor_y: AnchorY,
}

impl Default for ClockView {
    fn default() -> Self {
        Self {
            show_dial: true,
            anchor_y: AnchorY::Center,
        }
    }
}

impl ClockView {
    pub fn with_dial(mut self, show_dial: bool) -> Self {
        self.show_dial = show_dial;
        self
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Dial radius in rows for `viewport`, or `None` when it does not fit.
    pub fn dial_radius(&self, viewport: Viewport) -> Option<u16> {
        if !self.show_dial {
            return None;
        }
        // Dial takes 2r+1 rows plus a gap below it.
        let by_height = viewport.height.saturating_sub(TEXT_ROWS + 2) / 2;
        let by_width = (f32::from(viewport.width.saturating_sub(4)) / (2.0 * DIAL_ASPECT)) as u16;
        let r = DIAL_MAX_RADIUS.min(by_height).min(by_width);
        (r >= DIAL_MIN_RADIUS).then_some(r)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &ClockSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let radius = self.dial_radius(viewport);
        let dial_rows = radius.map(|r| 2 * r + 2).unwrap_or(0);
        let content_h = TEXT_ROWS + dial_rows;

        let mut y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(content_h) / 2,
            AnchorY::Top => 0,
        };

        fb.put_str_centered(y, &snap.title, TITLE);
        y = y.saturating_add(2);

        self.draw_digital(fb, snap, y);
        y = y.saturating_add(5);

        if let Some(r) = radius {
            let cx = i32::from(viewport.width / 2);
            let cy = i32::from(y) + i32::from(r);
            self.draw_dial(fb, snap, cx, cy, r);
            y = y.saturating_add(2 * r + 2);
        }

        fb.put_str_centered(y, &snap.date, TEXT.with_bold());
        y = y.saturating_add(2);

        fb.put_str_centered(y, &snap.footer, FAINT);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &ClockSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Boxed Klingon time with the plain time on the row below.
    fn draw_digital(&self, fb: &mut FrameBuffer, snap: &ClockSnapshot, top: u16) {
        let sep_w = text_width(TIME_SEPARATOR);
        let time_w = text_width(&snap.hours)
            .saturating_add(sep_w)
            .saturating_add(text_width(&snap.minutes))
            .saturating_add(sep_w)
            .saturating_add(text_width(&snap.seconds));
        let inner_w = time_w.max(text_width(&snap.plain_time));

        let box_w = inner_w.saturating_add(4).min(fb.width());
        let box_x = fb.width().saturating_sub(box_w) / 2;
        fb.draw_border(box_x, top, box_w, 4, FAINT);

        let sep_style = if snap.blink { FAINT } else { TEXT };
        let mut x = fb.width().saturating_sub(time_w) / 2;
        let row = top.saturating_add(1);
        for (text, style) in [
            (snap.hours.as_str(), TITLE),
            (TIME_SEPARATOR, sep_style),
            (snap.minutes.as_str(), TITLE),
            (TIME_SEPARATOR, sep_style),
            (snap.seconds.as_str(), TITLE),
        ] {
            fb.put_str(x, row, text, style);
            x = x.saturating_add(text_width(text));
        }

        fb.put_str_centered(top.saturating_add(2), &snap.plain_time, FAINT);
    }

    fn draw_dial(&self, fb: &mut FrameBuffer, snap: &ClockSnapshot, cx: i32, cy: i32, r: u16) {
        let radius = f32::from(r);
        let at = |angle: f32, dist: f32| -> (i32, i32) {
            let (dx, dy) = polar_offset(angle, dist);
            (
                cx + (dx * DIAL_ASPECT).round() as i32,
                cy + dy.round() as i32,
            )
        };

        // Rim.
        let steps = u32::from(r) * 16;
        for i in 0..steps {
            let (x, y) = at(i as f32 * 360.0 / steps as f32, radius);
            fb.plot(x, y, '·', FAINT);
        }

        // Emblem: three faint spokes behind the hands.
        let spoke = radius * 0.35;
        for base in [0.0_f32, 120.0, 240.0] {
            self.draw_ray(fb, &at, base + 60.0, spoke, '░', EMBLEM_STYLE);
        }

        for marker in HOUR_MARKERS.iter() {
            let (x, y) = at(marker.angle, radius);
            if marker.major {
                fb.plot(x, y, '█', TEXT);
            } else {
                fb.plot(x, y, '•', TEXT);
            }
        }

        for (label, angle) in DIAL_NUMERALS {
            let (x, y) = at(angle, radius - 1.5);
            let half = i32::from(text_width(label) / 2);
            for (i, ch) in label.chars().enumerate() {
                fb.plot(x - half + i as i32, y, ch, TITLE);
            }
        }

        let hands = snap.hands;
        self.draw_ray(fb, &at, hands.hour, radius * HOUR_HAND_RATIO, '█', TITLE);
        self.draw_ray(fb, &at, hands.minute, radius * MINUTE_HAND_RATIO, '▒', TEXT);
        self.draw_ray(fb, &at, hands.second, radius * SECOND_HAND_RATIO, '·', SECOND_HAND);

        fb.plot(cx, cy, 'o', TITLE);
    }

    fn draw_ray(
        &self,
        fb: &mut FrameBuffer,
        at: &impl Fn(f32, f32) -> (i32, i32),
        angle: f32,
        length: f32,
        ch: char,
        style: CellStyle,
    ) {
        // Sample densely enough to hit every column along a horizontal ray.
        let steps = (length * DIAL_ASPECT * 2.0).ceil().max(1.0) as u32;
        for i in 1..=steps {
            let (x, y) = at(angle, length * i as f32 / steps as f32);
            fb.plot(x, y, ch, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SnapshotOptions;
    use crate::types::{CalendarDate, ClockReading};

    fn snap_at(h: u32, m: u32, s: u32) -> ClockSnapshot {
        let reading = ClockReading::new(h, m, s, CalendarDate::new(0, 15, 0, 2024));
        ClockSnapshot::from_reading(&reading, &SnapshotOptions::default())
    }

    #[test]
    fn dial_radius_is_capped() {
        let view = ClockView::default();
        assert_eq!(view.dial_radius(Viewport::new(200, 80)), Some(DIAL_MAX_RADIUS));
    }

    #[test]
    fn dial_is_dropped_on_short_viewports() {
        let view = ClockView::default();
        assert_eq!(view.dial_radius(Viewport::new(80, 14)), None);
    }

    #[test]
    fn dial_can_be_disabled() {
        let view = ClockView::default().with_dial(false);
        assert_eq!(view.dial_radius(Viewport::new(200, 80)), None);
    }

    #[test]
    fn second_hand_points_up_at_zero_seconds() {
        let view = ClockView::default().with_anchor_y(AnchorY::Top);
        let vp = Viewport::new(80, 40);
        let fb = view.render(&snap_at(6, 30, 0), vp);

        let r = view.dial_radius(vp).unwrap();
        let cx = vp.width / 2;
        let cy = 7 + r;
        // Straight above the hub, inside the numeral ring.
        assert_eq!(fb.get(cx, cy - 2).unwrap().style.fg, RED);
    }

    #[test]
    fn hub_is_drawn_at_dial_center() {
        let view = ClockView::default().with_anchor_y(AnchorY::Top);
        let vp = Viewport::new(80, 40);
        let fb = view.render(&snap_at(1, 2, 3), vp);
        let r = view.dial_radius(vp).unwrap();
        assert_eq!(fb.get(vp.width / 2, 7 + r).unwrap().ch, 'o');
    }
}
