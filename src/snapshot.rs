//! Fixed-layout state dump used for verification runs: memory, then V0-VF,
//! then I and PC as little-endian words, then the two timers. 4118 bytes,
//! no padding.

use crate::error::MachineError;
use crate::machine::Machine;
use crate::memory::MEMORY_SIZE;
use crate::registers::REG_COUNT;

const V_OFFSET: usize = MEMORY_SIZE;
const I_OFFSET: usize = V_OFFSET + REG_COUNT;
const PC_OFFSET: usize = I_OFFSET + 2;
const DELAY_OFFSET: usize = PC_OFFSET + 2;
const SOUND_OFFSET: usize = DELAY_OFFSET + 1;

pub const STATE_DUMP_LEN: usize = SOUND_OFFSET + 1;

impl Machine {
    pub fn dump_state(&self) -> [u8; STATE_DUMP_LEN] {
        let mut dump = [0; STATE_DUMP_LEN];
        dump[..MEMORY_SIZE].copy_from_slice(self.memory.as_bytes());
        for reg in 0..REG_COUNT {
            dump[V_OFFSET + reg] = self.regs.get(reg as u8);
        }
        dump[I_OFFSET..I_OFFSET + 2].copy_from_slice(&self.i.to_le_bytes());
        dump[PC_OFFSET..PC_OFFSET + 2].copy_from_slice(&self.pc.to_le_bytes());
        dump[DELAY_OFFSET] = self.timers.delay();
        dump[SOUND_OFFSET] = self.timers.sound();
        dump
    }

    /// Rebuilds a machine from a dump. Fields outside the layout (stack,
    /// display, keypad) come back freshly initialized.
    pub fn from_dump(dump: &[u8]) -> Result<Machine, MachineError> {
        if dump.len() != STATE_DUMP_LEN {
            return Err(MachineError::MalformedDump {
                size: dump.len(),
                expected: STATE_DUMP_LEN,
            });
        }

        let mut machine = Machine::new();
        let mut image = [0; MEMORY_SIZE];
        image.copy_from_slice(&dump[..MEMORY_SIZE]);
        machine.memory.overwrite(&image);
        for reg in 0..REG_COUNT {
            machine.regs.set(reg as u8, dump[V_OFFSET + reg]);
        }
        machine.i = u16::from_le_bytes([dump[I_OFFSET], dump[I_OFFSET + 1]]);
        machine.pc = u16::from_le_bytes([dump[PC_OFFSET], dump[PC_OFFSET + 1]]);
        machine.timers.set_delay(dump[DELAY_OFFSET]);
        machine.timers.set_sound(dump[SOUND_OFFSET]);
        Ok(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_exactly_4118_bytes() {
        assert_eq!(STATE_DUMP_LEN, 4118);
        let machine = Machine::new();
        assert_eq!(machine.dump_state().len(), 4118);
    }

    #[test]
    fn integers_are_little_endian_at_fixed_offsets() {
        let mut machine = Machine::new();
        machine.i = 0x1234;
        machine.pc = 0x0ABC;
        machine.timers.set_delay(9);
        machine.timers.set_sound(4);
        let dump = machine.dump_state();
        assert_eq!(&dump[4112..4116], &[0x34, 0x12, 0xBC, 0x0A]);
        assert_eq!(dump[4116], 9);
        assert_eq!(dump[4117], 4);
    }

    #[test]
    fn dump_then_restore_round_trips() {
        let mut machine = Machine::new();
        machine
            .load_rom(&[0x60, 0x42, 0x61, 0x10, 0x80, 0x14])
            .unwrap();
        for _ in 0..3 {
            machine.cycle();
        }
        machine.i = 0x345;
        machine.timers.set_delay(0x20);

        let dump = machine.dump_state();
        let restored = Machine::from_dump(&dump).unwrap();
        assert_eq!(restored.dump_state(), dump);
        assert_eq!(restored.pc, 0x206);
        assert_eq!(restored.regs.get(0), 0x52);
        assert_eq!(restored.memory.read(0x200).unwrap(), 0x60);
    }

    #[test]
    fn truncated_dump_is_rejected() {
        let err = Machine::from_dump(&[0; 100]).unwrap_err();
        assert!(matches!(err, MachineError::MalformedDump { size: 100, .. }));
    }
}
