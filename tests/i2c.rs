use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use ilps22qs_rs::prelude::*;
use ilps22qs_rs::{I2CAddress, ID, Ilps22qs};

const I2C_ADDRESS: u8 = 0x5C;

#[test]
fn i2c_address() {
    assert_eq!(I2CAddress::I2cAdd as u8, I2C_ADDRESS);
}

#[test]
fn id_over_i2c() {
    let mut i2c = I2cMock::new(&[I2cTransaction::write_read(
        I2C_ADDRESS,
        vec![0x0F],
        vec![ID],
    )]);
    let mut sensor = Ilps22qs::new_i2c(i2c.clone(), I2CAddress::I2cAdd, NoopDelay);

    assert_eq!(sensor.id_get().unwrap(), ID);

    i2c.done();
}

#[test]
fn data_over_i2c() {
    let mut i2c = I2cMock::new(&[I2cTransaction::write_read(
        I2C_ADDRESS,
        vec![0x28],
        vec![0x00, 0x54, 0x3F, 0xD0, 0x09],
    )]);
    let mut sensor = Ilps22qs::new_i2c(i2c.clone(), I2CAddress::I2cAdd, NoopDelay);

    let data = sensor.data_get(&Md::default()).unwrap();
    assert_eq!(data.pressure.raw, 0x3F_5400);
    assert_eq!(data.pressure.hpa, 1013.25);
    assert_eq!(data.heat.deg_c, 25.12);

    i2c.done();
}
