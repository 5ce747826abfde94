use std::path::Path;
use std::process;

use log::info;

mod decode;
mod display;
mod error;
mod keypad;
mod machine;
mod memory;
mod registers;
mod screen;
mod snapshot;
mod sound;
mod timer;

use machine::{CycleStatus, Machine};
use screen::Screen;
use sound::Beeper;

// instruction cycles executed per presented frame
const CYCLES_PER_FRAME: u32 = 10;

fn usage() -> ! {
    eprintln!("usage: chipvm <rom> [--test]");
    process::exit(1);
}

fn main() {
    env_logger::init();

    let mut rom_path: Option<String> = None;
    let mut test_mode = false;
    for arg in std::env::args().skip(1) {
        if arg == "--test" {
            test_mode = true;
        } else if rom_path.is_none() {
            rom_path = Some(arg);
        } else {
            usage();
        }
    }
    let Some(rom_path) = rom_path else { usage() };

    let mut machine = Machine::new();
    machine.set_test_mode(test_mode);
    if let Err(err) = machine.load_rom_file(&rom_path) {
        eprintln!("failed to load {rom_path}: {err}");
        process::exit(1);
    }
    info!("loaded ROM {rom_path}");

    if test_mode {
        run_headless(machine, &rom_path);
    } else {
        run_windowed(machine);
    }
}

/// Verification driver: no window, no pacing. Runs until the program
/// signals completion with RET on an empty stack, then writes the state
/// dump next to the ROM.
fn run_headless(mut machine: Machine, rom_path: &str) {
    while machine.cycle() != CycleStatus::Halted {}

    let dump_path = Path::new(rom_path).with_extension("dump");
    if let Err(err) = std::fs::write(&dump_path, machine.dump_state()) {
        eprintln!("failed to write state dump: {err}");
        process::exit(1);
    }
    println!("state dumped to {}", dump_path.display());
}

fn run_windowed(mut machine: Machine) {
    let mut screen = match Screen::new() {
        Ok(screen) => screen,
        Err(err) => {
            eprintln!("failed to open window: {err}");
            process::exit(1);
        }
    };
    let mut beeper = Beeper::new();

    while screen.is_open() {
        screen.scan_keys(&mut machine.keypad);
        for _ in 0..CYCLES_PER_FRAME {
            machine.cycle();
        }
        if machine.display.take_draw_flag() {
            screen.present(machine.display.pixels());
        } else {
            screen.pump();
        }
        if let Some(beeper) = beeper.as_mut() {
            beeper.set_active(machine.tone_active());
        }
    }
}
