use log::warn;
use minifb::{Key, Scale, Window, WindowOptions};

use crate::display::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::keypad::Keypad;

const PIXEL_ON: u32 = 0x00FF_FFFF;
const PIXEL_OFF: u32 = 0x0000_0000;

// 1234/QWER/ASDF/ZXCV on the physical keyboard, hex pad layout on the other end
const KEYMAP: [(Key, u8); 16] = [
    (Key::Key1, 0x1),
    (Key::Key2, 0x2),
    (Key::Key3, 0x3),
    (Key::Key4, 0xC),
    (Key::Q, 0x4),
    (Key::W, 0x5),
    (Key::E, 0x6),
    (Key::R, 0xD),
    (Key::A, 0x7),
    (Key::S, 0x8),
    (Key::D, 0x9),
    (Key::F, 0xE),
    (Key::Z, 0xA),
    (Key::X, 0x0),
    (Key::C, 0xB),
    (Key::V, 0xF),
];

/// Host window: presents the framebuffer and feeds the keypad. No
/// interpreter logic lives here.
pub struct Screen {
    window: Window,
    frame: Vec<u32>,
}

impl Screen {
    pub fn new() -> Result<Self, minifb::Error> {
        let mut window = Window::new(
            "chipvm - ESC to exit",
            DISPLAY_WIDTH,
            DISPLAY_HEIGHT,
            WindowOptions {
                scale: Scale::X16,
                ..WindowOptions::default()
            },
        )?;
        // ~60 fps update rate; this also paces the cycle loop
        window.limit_update_rate(Some(std::time::Duration::from_micros(16600)));
        Ok(Self {
            window,
            frame: vec![0; DISPLAY_WIDTH * DISPLAY_HEIGHT],
        })
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }

    /// Pumps window events on frames where the framebuffer did not change,
    /// keeping input fresh and the rate limiter engaged.
    pub fn pump(&mut self) {
        self.window.update();
    }

    pub fn present(&mut self, pixels: &[u8]) {
        for (out, &pixel) in self.frame.iter_mut().zip(pixels) {
            *out = if pixel == 0 { PIXEL_OFF } else { PIXEL_ON };
        }
        if let Err(err) = self
            .window
            .update_with_buffer(&self.frame, DISPLAY_WIDTH, DISPLAY_HEIGHT)
        {
            warn!("framebuffer present failed: {err}");
        }
    }

    pub fn scan_keys(&self, keypad: &mut Keypad) {
        keypad.clear();
        for (key, index) in KEYMAP {
            if self.window.is_key_down(key) {
                keypad.press(index);
            }
        }
    }
}
