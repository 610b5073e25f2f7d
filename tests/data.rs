mod common;

use common::{MockBus, read, sensor, write};
use ilps22qs_rs::prelude::*;

const ONE_SHOT_1260: Md = Md {
    interleaved_mode: 0,
    fs: Fs::_1260hpa,
    odr: Odr::OneShot,
    avg: Avg::_4,
    lpf: LowPassFilter::Disable,
};

#[test]
fn one_shot_measurement() {
    // 1013.25 hPa, 25.12 °C
    let mut sensor = sensor(MockBus::new().with(0x28, &[0x00, 0x54, 0x3F, 0xD0, 0x09]));

    sensor.init_set(Init::DrvRdy).unwrap();
    sensor.mode_set(&ONE_SHOT_1260).unwrap();
    sensor.trigger_sw(&ONE_SHOT_1260).unwrap();
    assert_eq!(sensor.status_get().unwrap().end_meas, 1);

    sensor.bus.log.clear();
    let data = sensor.data_get(&ONE_SHOT_1260).unwrap();

    assert_eq!(sensor.bus.log, vec![read(0x28, 5)]);
    assert_eq!(data.pressure.raw, 0x3F_5400);
    assert_eq!(data.pressure.hpa, 1013.25);
    assert_eq!(data.pressure.raw as f32 / 4096.0, data.pressure.hpa);
    assert_eq!(data.heat.raw, 2512);
    assert_eq!(data.heat.deg_c, 25.12);
    assert_eq!(data.ah_qvar.lsb, 0);
}

#[test]
fn negative_samples_are_sign_extended() {
    let mut sensor = sensor(MockBus::new().with(0x28, &[0x00, 0x00, 0x80, 0x9C, 0xFF]));

    let data = sensor.data_get(&ONE_SHOT_1260).unwrap();
    assert_eq!(data.pressure.raw, -8_388_608);
    assert_eq!(data.pressure.hpa, -2048.0);
    assert_eq!(data.heat.raw, -100);
    assert_eq!(data.heat.deg_c, -1.0);

    let md = Md {
        fs: Fs::_4000hpa,
        ..ONE_SHOT_1260
    };
    sensor.bus.set(0x28, &[0xFF, 0xFF, 0xFF]);
    let data = sensor.data_get(&md).unwrap();
    assert_eq!(data.pressure.raw, -1);
    assert_eq!(data.pressure.hpa, -1.0 / 2048.0);
}

#[test]
fn full_scale_changes_pressure_scale() {
    let mut sensor = sensor(MockBus::new().with(0x28, &[0x00, 0x80, 0x3E]));
    let md = Md {
        fs: Fs::_4000hpa,
        ..ONE_SHOT_1260
    };

    assert_eq!(sensor.data_get(&ONE_SHOT_1260).unwrap().pressure.hpa, 1000.0);
    assert_eq!(sensor.data_get(&md).unwrap().pressure.hpa, 2000.0);
}

#[test]
fn interleaved_sample_fills_ah_qvar() {
    let mut sensor = sensor(MockBus::new().with(0x28, &[0x01, 0x00, 0x10]));
    let md = Md {
        interleaved_mode: 1,
        odr: Odr::_10hz,
        ..ONE_SHOT_1260
    };

    let data = sensor.data_get(&md).unwrap();
    assert_eq!(data.ah_qvar.lsb, 0x10_0001);
    assert_eq!(data.pressure.hpa, 0.0);

    let data = sensor.data_get(&ONE_SHOT_1260).unwrap();
    assert_eq!(data.ah_qvar.lsb, 0);
    assert_eq!(data.pressure.raw, 0x10_0001);
}

#[test]
fn raw_getters() {
    let mut sensor = sensor(MockBus::new().with(0x28, &[0x56, 0x34, 0x12, 0x9C, 0xFF]));

    assert_eq!(sensor.pressure_raw_get().unwrap(), 0x1234_5600);
    assert_eq!(sensor.temperature_raw_get().unwrap(), -100);
    assert_eq!(sensor.bus.log, vec![read(0x28, 3), read(0x2B, 2)]);
}

#[test]
fn ah_qvar_conversion() {
    let mut sensor = sensor(MockBus::new().with(0x28, &[0x00, 0x00, 0x40]));

    let data = sensor.ah_qvar_data_get().unwrap();
    assert_eq!(data.lsb, 0x40_0000);
    assert_eq!(data.raw, 0x4000_0000);
    assert_eq!(data.mv, 250.0);

    sensor.bus.set(0x28, &[0x00, 0x00, 0xC0]);
    let data = sensor.ah_qvar_data_get().unwrap();
    assert_eq!(data.lsb, -0x40_0000);
    assert_eq!(data.raw, -0x4000_0000);
    assert_eq!(data.mv, -250.0);
}

#[test]
fn ah_qvar_enable_and_disable() {
    let mut sensor = sensor(MockBus::new());

    sensor.ah_qvar_en_set(1).unwrap();
    assert_eq!(sensor.bus.regs[0x12], 0x81);
    assert_eq!(sensor.ah_qvar_en_get().unwrap(), 1);

    sensor.bus.log.clear();
    sensor.ah_qvar_disable().unwrap();
    assert_eq!(sensor.bus.log, vec![write(0x5F, &[0x00])]);
}
