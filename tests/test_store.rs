use ghost_hop::entities::HIGH_SCORE_ADDR;
use ghost_hop::store::{Eeprom, FileEeprom, MemEeprom, EEPROM_SIZE};

// ── 16-bit slot layout ────────────────────────────────────────────────────────

#[test]
fn store16_round_trips() {
    let mut ram = MemEeprom::new();
    for value in [0u16, 1, 7, 255, 256, 1234, 0xabcd, u16::MAX] {
        ram.store16(HIGH_SCORE_ADDR, value);
        assert_eq!(ram.load16(HIGH_SCORE_ADDR), value);
    }
}

#[test]
fn store16_is_big_endian() {
    let mut ram = MemEeprom::new();
    ram.store16(45, 0xabcd);
    assert_eq!(ram.read(45), 0xab); // high byte at the slot address
    assert_eq!(ram.read(46), 0xcd);
}

#[test]
fn load16_of_fresh_store_is_zero() {
    let ram = MemEeprom::new();
    assert_eq!(ram.load16(HIGH_SCORE_ADDR), 0);
}

// ── Address masking ───────────────────────────────────────────────────────────

#[test]
fn addresses_wrap_at_capacity() {
    let mut ram = MemEeprom::new();
    ram.write(0, 0xde);
    assert_eq!(ram.read(EEPROM_SIZE as u16), 0xde);
    ram.write(u16::MAX, 0xbe);
    assert_eq!(ram.read((EEPROM_SIZE - 1) as u16), 0xbe);
}

// ── Image load/snapshot ───────────────────────────────────────────────────────

#[test]
fn short_image_leaves_tail_untouched() {
    let mut ram = MemEeprom::new();
    ram.write(512, 0xff);
    ram.load_from(&[0xbb; 512]);
    assert_eq!(ram.read(0), 0xbb);
    assert_eq!(ram.read(511), 0xbb);
    assert_eq!(ram.read(512), 0xff);
}

#[test]
fn long_image_is_truncated() {
    let mut ram = MemEeprom::new();
    ram.load_from(&[0xcc; EEPROM_SIZE * 2]);
    assert!(ram.snapshot().iter().all(|&b| b == 0xcc));
}

#[test]
fn snapshot_round_trips_through_load_from() {
    let mut a = MemEeprom::new();
    a.store16(HIGH_SCORE_ADDR, 4242);
    let image = *a.snapshot();

    let mut b = MemEeprom::new();
    b.load_from(&image);
    assert_eq!(b.load16(HIGH_SCORE_ADDR), 4242);
}

// ── File-backed store (simulated restart) ─────────────────────────────────────

#[test]
fn file_store_survives_reopen() {
    let path = std::env::temp_dir().join(format!("ghost_hop_eeprom_{}", std::process::id()));
    let _ = std::fs::remove_file(&path);

    {
        let mut store = FileEeprom::open(&path).unwrap();
        assert_eq!(store.load16(HIGH_SCORE_ADDR), 0); // fresh image
        store.store16(HIGH_SCORE_ADDR, 9001);
    } // dropped — "power off"

    let store = FileEeprom::open(&path).unwrap();
    assert_eq!(store.load16(HIGH_SCORE_ADDR), 9001);

    let _ = std::fs::remove_file(&path);
}
