/// The two 8-bit countdown timers. `tick` is called once per instruction
/// cycle; the 60Hz wall-clock rate is the frame loop's responsibility.
#[derive(Debug)]
pub struct Timers {
    delay: u8,
    sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Self { delay: 0, sound: 0 }
    }

    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    pub fn delay(&self) -> u8 {
        self.delay
    }

    pub fn sound(&self) -> u8 {
        self.sound
    }

    pub fn set_delay(&mut self, value: u8) {
        self.delay = value;
    }

    pub fn set_sound(&mut self, value: u8) {
        self.sound = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_decrement_independently_and_floor_at_zero() {
        let mut timers = Timers::new();
        timers.set_delay(2);
        timers.set_sound(1);
        timers.tick();
        assert_eq!((timers.delay(), timers.sound()), (1, 0));
        timers.tick();
        assert_eq!((timers.delay(), timers.sound()), (0, 0));
        timers.tick();
        assert_eq!((timers.delay(), timers.sound()), (0, 0));
    }
}
