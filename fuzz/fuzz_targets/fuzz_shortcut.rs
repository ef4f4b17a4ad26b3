#![no_main]

use iconpicker::shortcut::ShortcutBinding;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(descriptor) = std::str::from_utf8(data) {
        if let Ok(binding) = ShortcutBinding::parse(descriptor) {
            // Labels are built from the descriptor, so they must not panic either
            let _ = binding.display_label();
            let _ = binding.id();
        }
    }
});
