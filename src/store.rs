/// Persistent score store — a byte-addressable EEPROM-style boundary.
///
/// The simulation only ever needs one 16-bit slot (the high score), written
/// big-endian through `store16`/`load16`.  No versioning and no corruption
/// detection; a torn write loses at most the record.

use std::io;
use std::path::{Path, PathBuf};

pub const EEPROM_SIZE: usize = 1024;

/// Byte-level persistent store.  `store16`/`load16` are the only operations
/// the game uses; they split a 16-bit value across `addr` (high byte) and
/// `addr + 1` (low byte).
pub trait Eeprom {
    fn read(&self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, value: u8);

    fn store16(&mut self, addr: u16, value: u16) {
        self.write(addr, (value >> 8) as u8);
        self.write(addr + 1, (value & 0xff) as u8);
    }

    fn load16(&self, addr: u16) -> u16 {
        (u16::from(self.read(addr)) << 8) | u16::from(self.read(addr + 1))
    }
}

// ── In-memory store ──────────────────────────────────────────────────────────

/// 1 KiB RAM-backed store.  Addresses are masked to 10 bits, so every access
/// is in range by construction.  Used directly in tests and as the core of
/// `FileEeprom`.
pub struct MemEeprom {
    data: [u8; EEPROM_SIZE],
}

impl MemEeprom {
    pub fn new() -> Self {
        Self { data: [0; EEPROM_SIZE] }
    }

    /// Overwrite the front of the array from a saved image.  Short images
    /// leave the tail untouched; long ones are truncated.
    pub fn load_from(&mut self, src: &[u8]) {
        let len = src.len().min(EEPROM_SIZE);
        self.data[..len].copy_from_slice(&src[..len]);
    }

    pub fn snapshot(&self) -> &[u8; EEPROM_SIZE] {
        &self.data
    }
}

impl Default for MemEeprom {
    fn default() -> Self {
        Self::new()
    }
}

impl Eeprom for MemEeprom {
    fn read(&self, addr: u16) -> u8 {
        self.data[(addr as usize) & (EEPROM_SIZE - 1)]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[(addr as usize) & (EEPROM_SIZE - 1)] = value;
    }
}

// ── File-backed store ────────────────────────────────────────────────────────

/// `MemEeprom` persisted to a file image.  The image is loaded once at open;
/// every byte write rewrites the file best-effort, mirroring how the game
/// treats persistence as fire-and-forget.
pub struct FileEeprom {
    mem: MemEeprom,
    path: PathBuf,
}

impl FileEeprom {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut mem = MemEeprom::new();
        match std::fs::read(&path) {
            Ok(image) => mem.load_from(&image),
            // A missing image is a fresh store, not an error.
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err),
        }
        Ok(Self { mem, path })
    }
}

impl Eeprom for FileEeprom {
    fn read(&self, addr: u16) -> u8 {
        self.mem.read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.mem.write(addr, value);
        let _ = std::fs::write(&self.path, self.mem.snapshot());
    }
}
