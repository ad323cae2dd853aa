//! Build a switch from an attribute sheet, drive a tap and a drag, and print
//! what each frame paints.
//!
//! Run with: `RUST_LOG=debug cargo run --example hello_switch`

#![allow(clippy::unwrap_used, clippy::disallowed_methods)]

use slideswitch::{
    Event, ImageHandle, Point, RecordingCanvas, Rect, SlideSwitch, SwitchAttributes, TouchId,
    Widget,
};
use std::collections::HashMap;

const SHEET: &str = r##"
variant = "bordered_bitmap"
on_color = "#FF32C781"
off_color = "#FFC9C9C9"
switch_on_background = "thumb_on"
switch_off_background = "thumb_off"
border_color = "#FFFFFFFF"
border_size = 2
inner_thick = 2
switch_status = false
"##;

fn main() {
    env_logger::init();
    println!("=== Slide Switch Example ===\n");

    let mut images = HashMap::new();
    images.insert("thumb_on".to_string(), ImageHandle::new(1, 48, 48));
    images.insert("thumb_off".to_string(), ImageHandle::new(2, 48, 48));

    let attrs = SwitchAttributes::from_toml_str(SHEET).unwrap();
    let mut switch = SlideSwitch::from_attributes(&attrs, &images).unwrap();
    switch.on_change(|on| println!("listener: switched {}", if on { "on" } else { "off" }));

    let result = switch.layout(Rect::new(0.0, 0.0, 120.0, 48.0));
    println!(
        "Layout: {}x{}, radius {}",
        result.size.width,
        result.size.height,
        switch.geometry().radius
    );

    // Tap on the thumb
    let thumb = switch.geometry().thumb_center(switch.rate());
    let id = TouchId(0);
    switch.event(&Event::TouchStart { id, position: thumb, time_ms: 0 });
    switch.event(&Event::TouchEnd { id, position: thumb, time_ms: 80 });

    let mut frame = 0;
    while switch.animate(1.0 / 60.0) {
        frame += 1;
        println!("  frame {frame:2}: rate {:.3}", switch.rate());
    }

    // Drag back to the off end
    let on_end = switch.geometry().thumb_center(1.0);
    let off_end = switch.geometry().thumb_center(0.0);
    switch.event(&Event::TouchStart { id, position: on_end, time_ms: 1000 });
    switch.event(&Event::TouchMove {
        id,
        position: Point::new(off_end.x, on_end.y),
        time_ms: 1016,
    });
    switch.event(&Event::TouchEnd {
        id,
        position: Point::new(off_end.x, on_end.y),
        time_ms: 1032,
    });

    let mut canvas = RecordingCanvas::new();
    switch.paint(&mut canvas);
    println!("\nFinal state: on = {}, {} draw commands:", switch.is_on(), canvas.command_count());
    for (i, cmd) in canvas.commands().iter().enumerate() {
        println!("  {}: {:?}", i + 1, cmd);
    }

    println!("\n=== Example Complete ===");
}
