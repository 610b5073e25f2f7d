#![allow(dead_code)]

use std::collections::VecDeque;

use embedded_hal_mock::eh1::delay::NoopDelay;
use ilps22qs_rs::Ilps22qs;
use st_mems_bus::BusOperation;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockError {
    Nack,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transaction {
    Read { reg: u8, len: usize },
    Write { reg: u8, data: Vec<u8> },
}

pub fn read(reg: u8, len: usize) -> Transaction {
    Transaction::Read { reg, len }
}

pub fn write(reg: u8, data: &[u8]) -> Transaction {
    Transaction::Write {
        reg,
        data: data.to_vec(),
    }
}

const CTRL_REG2: usize = 0x11;
const INT_SOURCE: usize = 0x24;
const FIFO_STATUS1: usize = 0x25;
const STATUS: usize = 0x27;
const FIFO_DATA_OUT: u8 = 0x78;

/// Register file behind a fake bus.
///
/// Every register access is logged. BOOT, SWRESET and ONE_SHOT clear
/// themselves on write unless the matching `stuck_*` flag is set; a 3-byte
/// read at FIFO_DATA_OUT_PRESS_XL pops `fifo`.
pub struct MockBus {
    pub regs: [u8; 256],
    pub log: Vec<Transaction>,
    pub fifo: VecDeque<[u8; 3]>,
    pub stuck_boot: bool,
    pub stuck_reset: bool,
    pub fail: bool,
}

impl MockBus {
    pub fn new() -> Self {
        let mut regs = [0u8; 256];
        regs[0x0F] = 0xB4;
        regs[0x12] = 0x01;
        Self {
            regs,
            log: Vec::new(),
            fifo: VecDeque::new(),
            stuck_boot: false,
            stuck_reset: false,
            fail: false,
        }
    }

    pub fn with(mut self, reg: u8, data: &[u8]) -> Self {
        self.set(reg, data);
        self
    }

    pub fn set(&mut self, reg: u8, data: &[u8]) {
        for (i, byte) in data.iter().enumerate() {
            self.regs[(reg as usize + i) & 0xFF] = *byte;
        }
    }

    pub fn writes(&self) -> Vec<Transaction> {
        self.log
            .iter()
            .filter(|t| matches!(t, Transaction::Write { .. }))
            .cloned()
            .collect()
    }

    fn settle_ctrl_reg2(&mut self) {
        let ctrl_reg2 = self.regs[CTRL_REG2];
        if ctrl_reg2 & 0x80 != 0 {
            self.regs[CTRL_REG2] &= !0x80;
            if self.stuck_boot {
                self.regs[INT_SOURCE] |= 0x80;
            }
        }
        if ctrl_reg2 & 0x04 != 0 && !self.stuck_reset {
            self.regs[CTRL_REG2] &= !0x04;
        }
        if ctrl_reg2 & 0x01 != 0 {
            self.regs[CTRL_REG2] &= !0x01;
            self.regs[STATUS] |= 0x03;
        }
    }
}

impl BusOperation for MockBus {
    type Error = MockError;

    fn read_bytes(&mut self, rbuf: &mut [u8]) -> Result<(), Self::Error> {
        if self.fail {
            return Err(MockError::Nack);
        }
        rbuf.fill(0);
        Ok(())
    }

    fn write_bytes(&mut self, wbuf: &[u8]) -> Result<(), Self::Error> {
        match wbuf.split_first() {
            Some((reg, data)) => self.write_to_register(*reg, data),
            None => Ok(()),
        }
    }

    fn write_byte_read_bytes(&mut self, wbuf: &[u8; 1], rbuf: &mut [u8]) -> Result<(), Self::Error> {
        self.read_from_register(wbuf[0], rbuf)
    }

    fn read_from_register(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        if self.fail {
            return Err(MockError::Nack);
        }
        self.log.push(read(reg, buf.len()));

        if reg == FIFO_DATA_OUT && buf.len() == 3 {
            let sample = self.fifo.pop_front().unwrap_or_default();
            buf.copy_from_slice(&sample);
            self.regs[FIFO_STATUS1] = self.regs[FIFO_STATUS1].saturating_sub(1);
            return Ok(());
        }

        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = self.regs[(reg as usize + i) & 0xFF];
        }
        Ok(())
    }

    fn write_to_register(&mut self, reg: u8, buf: &[u8]) -> Result<(), Self::Error> {
        if self.fail {
            return Err(MockError::Nack);
        }
        self.log.push(write(reg, buf));
        self.set(reg, buf);

        let first = reg as usize;
        if (first..first + buf.len()).contains(&CTRL_REG2) {
            self.settle_ctrl_reg2();
        }
        Ok(())
    }
}

pub fn sensor(bus: MockBus) -> Ilps22qs<MockBus, NoopDelay> {
    Ilps22qs::new_bus(bus, NoopDelay)
}
