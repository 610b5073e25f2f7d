mod common;

use common::{MockBus, MockError, read, sensor, write};
use embedded_hal_mock::eh1::delay::{CheckedDelay, Transaction as DelayTransaction};
use ilps22qs_rs::prelude::*;
use ilps22qs_rs::{BOOT_TIME_MS, Error, ID, Ilps22qs};

#[test]
fn id_matches_device() {
    let mut sensor = sensor(MockBus::new());

    assert_eq!(sensor.id_get().unwrap(), ID);
    assert_eq!(sensor.bus.log, vec![read(0x0F, 1)]);
}

#[test]
fn drv_rdy_writes_both_control_registers_at_once() {
    let mut sensor = sensor(MockBus::new().with(0x11, &[0x00, 0x00]));

    sensor.init_set(Init::DrvRdy).unwrap();

    assert_eq!(
        sensor.bus.log,
        vec![read(0x11, 2), write(0x11, &[0x08, 0x01])]
    );
}

#[test]
fn drv_rdy_keeps_other_fields() {
    let mut sensor = sensor(MockBus::new().with(0x11, &[0x40, 0x80]));

    sensor.init_set(Init::DrvRdy).unwrap();

    assert_eq!(sensor.bus.writes(), vec![write(0x11, &[0x48, 0x81])]);
}

fn boot_delays(count: usize) -> Vec<DelayTransaction> {
    vec![DelayTransaction::delay_ms(BOOT_TIME_MS); count]
}

#[test]
fn boot_waits_for_boot_phase_to_end() {
    let delay = CheckedDelay::new(&boot_delays(1));
    let mut sensor = Ilps22qs::new_bus(MockBus::new(), delay);

    sensor.init_set(Init::Boot).unwrap();

    let (bus, mut delay) = sensor.release();
    delay.done();
    assert_eq!(
        bus.log,
        vec![read(0x11, 2), write(0x11, &[0x80]), read(0x24, 1)]
    );
    assert_eq!(bus.regs[0x11] & 0x80, 0);
}

#[test]
fn stuck_boot_reports_not_ready() {
    let mut bus = MockBus::new();
    bus.stuck_boot = true;
    let delay = CheckedDelay::new(&boot_delays(6));
    let mut sensor = Ilps22qs::new_bus(bus, delay);

    assert_eq!(sensor.init_set(Init::Boot), Err(Error::NotReady));

    let (bus, mut delay) = sensor.release();
    delay.done();
    let polls = bus.log.iter().filter(|t| **t == read(0x24, 1)).count();
    assert_eq!(polls, 6);
}

#[test]
fn reset_polls_swreset() {
    let delay = CheckedDelay::new(&boot_delays(0));
    let mut sensor = Ilps22qs::new_bus(MockBus::new(), delay);

    sensor.init_set(Init::Reset).unwrap();

    let (bus, mut delay) = sensor.release();
    delay.done();
    assert_eq!(
        bus.log,
        vec![read(0x11, 2), write(0x11, &[0x04]), read(0x11, 1)]
    );
}

#[test]
fn stuck_reset_reports_not_ready() {
    let mut bus = MockBus::new();
    bus.stuck_reset = true;
    let delay = CheckedDelay::new(&boot_delays(6));
    let mut sensor = Ilps22qs::new_bus(bus, delay);

    assert_eq!(sensor.init_set(Init::Reset), Err(Error::NotReady));

    let (bus, mut delay) = sensor.release();
    delay.done();
    let polls = bus.log.iter().filter(|t| **t == read(0x11, 1)).count();
    assert_eq!(polls, 6);
}

#[test]
fn bus_errors_pass_through() {
    let mut bus = MockBus::new();
    bus.fail = true;
    let mut sensor = sensor(bus);

    assert_eq!(sensor.id_get(), Err(Error::Bus(MockError::Nack)));
    assert_eq!(sensor.init_set(Init::DrvRdy), Err(Error::Bus(MockError::Nack)));
    assert_eq!(sensor.mode_get(), Err(Error::Bus(MockError::Nack)));
}

#[test]
fn release_returns_bus() {
    let mut sensor = sensor(MockBus::new());
    sensor.id_get().unwrap();

    let (bus, _delay) = sensor.release();
    assert_eq!(bus.log.len(), 1);
}
