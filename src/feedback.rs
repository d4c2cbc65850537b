//! Reveal graphics and run summary
//!
//! The feedback canvas sits over the target board and only ever shows the
//! directional arrow from a wrong guess to the correct placement; the colored
//! reveal boxes are class toggles handled by the board module. The run
//! summary (result boxes plus a Yours-vs-Average table) is built here too.

use glam::Vec2;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::{CanvasRenderingContext2d, Document, Element};

#[cfg(target_arch = "wasm32")]
use crate::api::RunStats;
#[cfg(target_arch = "wasm32")]
use crate::run::PuzzleRecord;

/// Arrow head wing points for a shaft ending at `to`
///
/// Pure geometry so the head shape is testable without a canvas.
pub fn arrow_head(from: Vec2, to: Vec2, size: f32) -> [Vec2; 2] {
    let dir = (to - from).normalize_or_zero();
    let side = Vec2::new(-dir.y, dir.x);
    let base = to - dir * size;
    [base + side * (size * 0.5), base - side * (size * 0.5)]
}

/// Seconds as `m:ss`
pub fn format_duration(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes}:{seconds:02}")
}

/// Wipe the feedback canvas
#[cfg(target_arch = "wasm32")]
pub fn clear_canvas(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
}

/// Draw the guess-to-answer arrow (canvas-local pixel coordinates)
#[cfg(target_arch = "wasm32")]
pub fn draw_guess_arrow(ctx: &CanvasRenderingContext2d, from: Vec2, to: Vec2) {
    const HEAD_SIZE: f32 = 16.0;

    let dir = (to - from).normalize_or_zero();
    // Stop the shaft at the head's base so the tip stays crisp
    let shaft_end = to - dir * HEAD_SIZE;

    ctx.set_stroke_style_str("#d64545");
    ctx.set_fill_style_str("#d64545");
    ctx.set_line_width(4.0);

    ctx.begin_path();
    ctx.move_to(from.x as f64, from.y as f64);
    ctx.line_to(shaft_end.x as f64, shaft_end.y as f64);
    ctx.stroke();

    let [left, right] = arrow_head(from, to, HEAD_SIZE);
    ctx.begin_path();
    ctx.move_to(to.x as f64, to.y as f64);
    ctx.line_to(left.x as f64, left.y as f64);
    ctx.line_to(right.x as f64, right.y as f64);
    ctx.close_path();
    ctx.fill();
}

/// One clickable ✓/✕ box per answered puzzle
#[cfg(target_arch = "wasm32")]
pub fn render_summary_boxes(
    document: &Document,
    container: &Element,
    records: &[PuzzleRecord],
) -> Result<(), JsValue> {
    container.set_inner_html("");
    for record in records {
        let shade = if record.success { "correct" } else { "incorrect" };
        let class = format!("run-summary-box {shade}");
        let mark = if record.success { "\u{2713}" } else { "\u{2715}" };

        let boxed = document.create_element("div")?;
        boxed.set_class_name(&class);
        boxed.set_text_content(Some(mark));
        let _ = boxed.set_attribute("title", "Open this puzzle");

        // Click opens the puzzle in a new tab
        let puzzle_id = record.puzzle_id;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target_and_features(
                    &format!("/puzzle/{puzzle_id}"),
                    "_blank",
                    "noopener,noreferrer",
                );
            }
        });
        let _ = boxed
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();

        container.append_child(&boxed)?;
    }
    Ok(())
}

/// Completion note plus the Yours-vs-Average table
///
/// Average cells degrade to an em dash when the server sent no stats.
#[cfg(target_arch = "wasm32")]
pub fn render_summary_stats(
    document: &Document,
    container: &Element,
    solved: u32,
    len: u32,
    time_seconds: u64,
    stats: Option<&RunStats>,
) -> Result<(), JsValue> {
    container.set_inner_html("");

    let yours_solved = format!("{solved}/{len}");
    let yours_time = format_duration(time_seconds);
    let (avg_solved, avg_time) = match stats {
        Some(stats) => (
            stats
                .avg_correct_count
                .map(|avg| format!("{}/{len}", avg.round() as u32))
                .unwrap_or_else(|| "\u{2014}".to_string()),
            stats
                .avg_time_seconds
                .map(|avg| format_duration(avg.round().max(0.0) as u64))
                .unwrap_or_else(|| "\u{2014}".to_string()),
        ),
        None => ("\u{2014}".to_string(), "\u{2014}".to_string()),
    };

    if let Some(stats) = stats {
        let note = document.create_element("div")?;
        note.set_class_name("run-summary-note");
        let times = if stats.completed_count == 1 {
            "time"
        } else {
            "times"
        };
        note.set_text_content(Some(&format!(
            "This run has been completed {} {times}.",
            stats.completed_count
        )));
        container.append_child(&note)?;
    }

    let table = document.create_element("table")?;
    let thead = document.create_element("thead")?;
    let head_row = document.create_element("tr")?;
    for label in ["", "Yours", "Average"] {
        let th = document.create_element("th")?;
        th.set_text_content(Some(label));
        head_row.append_child(&th)?;
    }
    thead.append_child(&head_row)?;
    table.append_child(&thead)?;

    let tbody = document.create_element("tbody")?;
    let rows = [
        ["Solved", yours_solved.as_str(), avg_solved.as_str()],
        ["Time", yours_time.as_str(), avg_time.as_str()],
    ];
    for cells in rows {
        let tr = document.create_element("tr")?;
        for (i, text) in cells.iter().enumerate() {
            let cell = document.create_element(if i == 0 { "th" } else { "td" })?;
            cell.set_text_content(Some(text));
            tr.append_child(&cell)?;
        }
        tbody.append_child(&tr)?;
    }
    table.append_child(&tbody)?;
    container.append_child(&table)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(60), "1:00");
        assert_eq!(format_duration(85), "1:25");
        assert_eq!(format_duration(754), "12:34");
    }

    #[test]
    fn test_arrow_head_is_symmetric() {
        let from = Vec2::new(0.0, 0.0);
        let to = Vec2::new(100.0, 0.0);
        let [left, right] = arrow_head(from, to, 10.0);
        // Both wings sit at the head base, mirrored across the shaft
        assert!((left.x - 90.0).abs() < 1e-4);
        assert!((right.x - 90.0).abs() < 1e-4);
        assert!((left.y + right.y).abs() < 1e-4);
        assert!((left.y - right.y).abs() > 1.0);
    }

    #[test]
    fn test_arrow_head_degenerate_segment() {
        // Zero-length shaft must not produce NaNs
        let [left, right] = arrow_head(Vec2::ZERO, Vec2::ZERO, 10.0);
        assert!(left.is_finite());
        assert!(right.is_finite());
    }
}
