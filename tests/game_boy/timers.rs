use crate::common::{self, RomBuilder};

#[test]
fn counter_overflow_reloads_modulo_and_requests_interrupt() {
    let mut gb = RomBuilder::new().build();
    gb.write(0xff06, 0x05);
    gb.write(0xff05, 0xff);
    gb.write(0xff07, 0b101);

    // Each nop is four clocks; the counter ticks every sixteen
    common::step_n(&mut gb, 3);
    assert_eq!(gb.read(0xff0f) & 0x04, 0);
    assert_eq!(gb.read(0xff05), 0xff);

    common::step(&mut gb);
    assert_eq!(gb.read(0xff0f) & 0x04, 0x04);
    assert_eq!(gb.read(0xff05), 0x05);
}

#[test]
fn disabled_counter_holds() {
    let mut gb = RomBuilder::new().build();
    gb.write(0xff07, 0b001);

    common::step_n(&mut gb, 100);
    assert_eq!(gb.read(0xff05), 0);
}

#[test]
fn divider_counts_every_256_clocks_and_resets_on_write() {
    let mut gb = RomBuilder::new().build();

    common::step_n(&mut gb, 63);
    assert_eq!(gb.read(0xff04), 0);
    common::step(&mut gb);
    assert_eq!(gb.read(0xff04), 1);

    gb.write(0xff04, 0x80);
    assert_eq!(gb.read(0xff04), 0);
    assert_eq!(gb.timers().divider(), 0);
}

#[test]
fn control_reads_back_with_unused_bits_set() {
    let mut gb = RomBuilder::new().build();
    gb.write(0xff07, 0b110);
    assert_eq!(gb.read(0xff07), 0xfe);
}
