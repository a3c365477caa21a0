//! Tests for the caller header of boxed entries.

use framelog::printer::{
    BOTTOM_BORDER, MIDDLE_BORDER, TOP_BORDER, caller_index, callers, header_lines,
};
use framelog::{CallStack, Config, Frame, MemoryBackend, Printer};
use std::sync::Arc;

/// A fixed stack, innermost first, as seen from inside the printer.
struct FixedStack(Vec<Frame>);

impl CallStack for FixedStack {
    fn capture(&self) -> Vec<Frame> {
        self.0.clone()
    }
}

fn shop_stack() -> Vec<Frame> {
    vec![
        Frame::new("framelog::printer::Printer::log", "src/printer/mod.rs", 260),
        Frame::new("framelog::printer::Printer::info", "src/printer/mod.rs", 191),
        Frame::new("shop::checkout::Cart::submit", "/home/dev/shop/src/checkout.rs", 88),
        Frame::new("shop::main", "src/main.rs", 12),
    ]
}

fn printer_with(memory: &Arc<MemoryBackend>, method_count: i32) -> Printer {
    let mut config = Config::default();
    config
        .tag("SHOP")
        .method_count(method_count)
        .show_thread_info(false)
        .add_logger(memory.clone());
    Printer::with_call_stack(config, FixedStack(shop_stack()))
}

#[test]
fn frame_name_parts() {
    let frame = Frame::new("shop::checkout::Cart::submit", "/home/dev/shop/src/checkout.rs", 88);
    assert_eq!(frame.method_name(), "submit");
    assert_eq!(frame.type_name(), "Cart");
    assert_eq!(frame.file_name(), "checkout.rs");
    assert!(frame.is_in("shop::checkout"));
    assert!(!frame.is_in("shop::check"));
}

#[test]
fn trait_impl_frames_are_unwrapped() {
    let frame = Frame::new("<shop::Cart as core::fmt::Display>::fmt", "src/lib.rs", 3);
    assert_eq!(frame.method_name(), "fmt");
    assert_eq!(frame.type_name(), "Cart");
    assert!(frame.is_in("shop"));
}

#[test]
fn closure_frames_name_their_enclosing_function() {
    let frame = Frame::new("shop::checkout::Cart::submit::{{closure}}", "src/checkout.rs", 90);
    assert_eq!(frame.method_name(), "{{closure}}");
    assert_eq!(frame.type_name(), "submit");
    assert!(frame.is_in("shop::checkout"));
}

#[test]
fn caller_is_first_frame_after_internal_ones() {
    let trace = shop_stack();
    assert_eq!(caller_index(&trace, &["framelog::printer"]), 2);
    assert_eq!(caller_index(&trace, &["nothing::here"]), 0);
    assert_eq!(caller_index(&trace[..2], &["framelog::printer"]), 2);
}

#[test]
fn callers_are_clamped_to_stack_depth() {
    let trace = shop_stack();
    assert_eq!(callers(&trace, &["framelog::printer"], 1).len(), 1);
    assert_eq!(callers(&trace, &["framelog::printer"], 10).len(), 2);
    assert!(callers(&trace[..2], &["framelog::printer"], 3).is_empty());
}

#[test]
fn header_lines_nest_deeper_per_frame() {
    let trace = shop_stack();
    assert_eq!(
        header_lines(&trace[2..]),
        vec![
            "║ Cart.submit (checkout.rs:88)".to_string(),
            "║    shop.main (main.rs:12)".to_string(),
        ]
    );
}

#[test]
fn boxed_entry_shows_callers() {
    let memory = Arc::new(MemoryBackend::new());
    let printer = printer_with(&memory, 2);

    printer.info("paid", &[]);

    assert_eq!(
        memory.lines(),
        vec![
            TOP_BORDER,
            "║ Cart.submit (checkout.rs:88)",
            "║    shop.main (main.rs:12)",
            MIDDLE_BORDER,
            "║ paid",
            BOTTOM_BORDER,
        ]
    );
}

#[test]
fn method_override_changes_depth() {
    let memory = Arc::new(MemoryBackend::new());
    let printer = printer_with(&memory, 2);

    printer.method(1).info("one frame", &[]);
    printer.method(0).info("bare", &[]);

    assert_eq!(
        memory.lines(),
        vec![
            TOP_BORDER,
            "║ Cart.submit (checkout.rs:88)",
            MIDDLE_BORDER,
            "║ one frame",
            BOTTOM_BORDER,
            "bare",
        ]
    );
}

#[test]
fn header_precedes_fragments() {
    let memory = Arc::new(MemoryBackend::new());
    let printer = printer_with(&memory, 1);

    printer.append("cart: %s", &[&"3 items"]).info("paid", &[]);

    assert_eq!(
        memory.lines(),
        vec![
            TOP_BORDER,
            "║ Cart.submit (checkout.rs:88)",
            MIDDLE_BORDER,
            "║ cart: 3 items",
            MIDDLE_BORDER,
            "║ paid",
            BOTTOM_BORDER,
        ]
    );
}
