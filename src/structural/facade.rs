//! Facade pattern: starting a computer with a single call.
//!
//! The subsystems each expose low-level steps; [`ComputerFacade`] knows the
//! order they must run in.

use tracing::debug;

/// Address the BIOS loads the boot sector to.
pub const BOOT_ADDRESS: u64 = 0x7c00;
/// Sector the boot loader lives in.
pub const BOOT_SECTOR: u64 = 0;
/// Bytes read for the boot loader.
pub const SECTOR_SIZE: usize = 512;

#[derive(Debug, Default)]
pub struct Cpu {
    program_counter: u64,
    running: bool,
}

impl Cpu {
    pub fn freeze(&mut self) -> String {
        self.running = false;
        "CPU: freeze".to_string()
    }

    pub fn jump(&mut self, address: u64) -> String {
        self.program_counter = address;
        format!("CPU: jump to {:#06x}", address)
    }

    pub fn execute(&mut self) -> String {
        self.running = true;
        format!("CPU: execute from {:#06x}", self.program_counter)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[derive(Debug, Default)]
pub struct Memory {
    loaded: Option<(u64, Vec<u8>)>,
}

impl Memory {
    pub fn load(&mut self, address: u64, data: Vec<u8>) -> String {
        let line = format!("Memory: load {} bytes at {:#06x}", data.len(), address);
        self.loaded = Some((address, data));
        line
    }

    pub fn loaded_at(&self) -> Option<u64> {
        self.loaded.as_ref().map(|(address, _)| *address)
    }
}

#[derive(Debug, Default)]
pub struct HardDrive;

impl HardDrive {
    pub fn read(&self, sector: u64, size: usize) -> (Vec<u8>, String) {
        (vec![0; size], format!("HardDrive: read {} bytes from sector {}", size, sector))
    }
}

/// Single entry point hiding the boot sequence.
#[derive(Debug, Default)]
pub struct ComputerFacade {
    cpu: Cpu,
    memory: Memory,
    drive: HardDrive,
}

impl ComputerFacade {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the boot sequence, returning each subsystem's log line in order.
    pub fn start(&mut self) -> Vec<String> {
        let mut log = vec![self.cpu.freeze()];
        let (boot_sector, line) = self.drive.read(BOOT_SECTOR, SECTOR_SIZE);
        log.push(line);
        log.push(self.memory.load(BOOT_ADDRESS, boot_sector));
        log.push(self.cpu.jump(BOOT_ADDRESS));
        log.push(self.cpu.execute());
        debug!(steps = log.len(), "computer started");
        log
    }

    pub fn is_running(&self) -> bool {
        self.cpu.is_running()
    }
}
