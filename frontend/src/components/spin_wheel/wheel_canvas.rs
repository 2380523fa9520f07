use std::f64::consts::PI;

use shared::shared_spin_wheel::{Segment, PALETTE_SIZE};
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const CANVAS_SIZE: u32 = 400;
const IDLE_TRANSITION_MS: u32 = 300;
const SEGMENT_COLORS: [&str; PALETTE_SIZE] = ["#f97316", "#06b6d4", "#8b5cf6", "#ec4899"];
const HIGHLIGHT_COLOR: &str = "#facc15";
const MAX_LABEL_CHARS: usize = 14;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub segments: Vec<Segment>,
    pub rotation: f64,
    pub is_spinning: bool,
    pub settle_delay_ms: u32,
    #[prop_or_default]
    pub highlight: Option<String>,
}

fn is_dark_mode() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn short_label(name: &str) -> String {
    if name.chars().count() > MAX_LABEL_CHARS {
        let head: String = name.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{}…", head)
    } else {
        name.to_string()
    }
}

/// Draws the wheel at rest. Rotation is applied by CSS on the element so the
/// browser handles the easing.
fn draw_wheel(context: &CanvasRenderingContext2d, segments: &[Segment], highlight: Option<&str>) {
    let size = CANVAS_SIZE as f64;
    let center = size / 2.0;
    let radius = center - 10.0;
    let dark = is_dark_mode();

    context.clear_rect(0.0, 0.0, size, size);

    context.begin_path();
    context.set_fill_style_str(if dark { "#1a1c2e" } else { "#f0f2ff" });
    let _ = context.arc(center, center, radius, 0.0, 2.0 * PI);
    context.fill();

    // Canvas angles start at 3 o'clock; segments are measured from 12 o'clock
    let to_radians = |degrees: f64| (degrees - 90.0) * PI / 180.0;

    for segment in segments {
        let start = to_radians(segment.start_angle);
        let end = to_radians(segment.start_angle + segment.sweep);
        let is_highlighted = highlight == Some(segment.name.as_str());

        context.begin_path();
        context.set_fill_style_str(if is_highlighted {
            HIGHLIGHT_COLOR
        } else {
            SEGMENT_COLORS[segment.color_slot()]
        });
        context.move_to(center, center);
        let _ = context.arc(center, center, radius, start, end);
        context.close_path();
        context.fill();

        context.set_stroke_style_str(if dark { "rgba(255, 255, 255, 0.4)" } else { "rgba(255, 255, 255, 0.9)" });
        context.set_line_width(2.0);
        context.stroke();
    }

    context.set_text_align("right");
    context.set_text_baseline("middle");
    context.set_font("bold 14px 'Segoe UI', Roboto, system-ui, sans-serif");
    context.set_shadow_color("rgba(0, 0, 0, 0.5)");
    context.set_shadow_blur(3.0);

    for segment in segments {
        context.save();
        let _ = context.translate(center, center);
        let _ = context.rotate(to_radians(segment.mid_angle()));
        context.set_fill_style_str(if highlight == Some(segment.name.as_str()) { "#1f2937" } else { "#ffffff" });
        let _ = context.fill_text(&short_label(&segment.name), radius - 14.0, 0.0);
        context.restore();
    }

    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);

    context.begin_path();
    context.set_fill_style_str(if dark { "#2d3142" } else { "#8b5cf6" });
    let _ = context.arc(center, center, radius * 0.12, 0.0, 2.0 * PI);
    context.fill();

    context.begin_path();
    context.set_stroke_style_str(if dark { "rgba(180, 130, 255, 0.5)" } else { "rgba(130, 100, 255, 0.5)" });
    context.set_line_width(4.0);
    let _ = context.arc(center, center, radius - 2.0, 0.0, 2.0 * PI);
    context.stroke();
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.segments.clone(), props.highlight.clone()),
            move |(segments, highlight)| {
                if let Some(context) = canvas_ref.cast::<HtmlCanvasElement>().as_ref().and_then(context_2d) {
                    draw_wheel(&context, segments, highlight.as_deref());
                }
                || ()
            },
        );
    }

    let transition_ms = if props.is_spinning {
        props.settle_delay_ms
    } else {
        IDLE_TRANSITION_MS
    };
    let wheel_style = format!(
        "transform: rotate({}deg); transition: transform {}ms cubic-bezier(0.17, 0.67, 0.12, 0.99);",
        props.rotation, transition_ms
    );

    html! {
        <div class="relative mx-auto w-full max-w-sm aspect-square">
            <div class="absolute left-1/2 -top-1 -translate-x-1/2 z-10 w-0 h-0 border-l-[14px] border-r-[14px] border-t-[24px] border-l-transparent border-r-transparent border-t-yellow-400 drop-shadow-lg" />
            <canvas
                ref={canvas_ref}
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                class="w-full h-full rounded-full shadow-xl"
                style={wheel_style}
            />
        </div>
    }
}
