use crate::entities::{Instance, Rect};
use crate::io::ext_repr::ExtInstance;
use anyhow::{Result, ensure};

/// Imports an instance into the library.
///
/// The heuristics assume every item fits on an empty level, this is verified here:
/// all values must be finite and non-negative, and no item may be longer than the recipient.
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    let recipient_length = ext_instance.recipient_length;
    ensure!(
        recipient_length.is_finite() && recipient_length > 0.0,
        "recipient length should be finite and positive, got {recipient_length}"
    );

    let mut rects = Vec::with_capacity(ext_instance.rects.len());
    for (id, ext_rect) in ext_instance.rects.iter().enumerate() {
        let rect = Rect::new(ext_rect.length, ext_rect.height, ext_rect.weight);
        for (field, value) in [
            ("length", rect.length),
            ("height", rect.height),
            ("weight", rect.weight),
        ] {
            ensure!(
                value.is_finite() && value >= 0.0,
                "rect {id}: {field} should be finite and non-negative, got {value}"
            );
        }
        ensure!(
            rect.length <= recipient_length,
            "rect {id}: length {} exceeds the recipient length {recipient_length}",
            rect.length
        );
        rects.push(rect);
    }

    Ok(Instance::new(rects, recipient_length))
}
