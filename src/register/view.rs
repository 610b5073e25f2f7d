use super::main::*;

/// Typed interpretation of a single register byte, keyed by address.
///
/// Registers with a bitfield layout decode into their record, the others
/// (output bytes, thresholds, offsets, identification) stay plain bytes.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RegisterView {
    InterruptCfg(InterruptCfg),
    IfCtrl(IfCtrl),
    CtrlReg1(CtrlReg1),
    CtrlReg2(CtrlReg2),
    CtrlReg3(CtrlReg3),
    FifoCtrl(FifoCtrl),
    FifoWtm(FifoWtm),
    I3cIfCtrl(I3cIfCtrl),
    IntSource(IntSource),
    FifoStatus2(FifoStatus2),
    Status(Status),
    Byte(Reg, u8),
}

impl RegisterView {
    pub fn decode(reg: Reg, byte: u8) -> Self {
        match reg {
            Reg::InterruptCfg => Self::InterruptCfg(InterruptCfg::from_bits(byte)),
            Reg::IfCtrl => Self::IfCtrl(IfCtrl::from_bits(byte)),
            Reg::CtrlReg1 => Self::CtrlReg1(CtrlReg1::from_bits(byte)),
            Reg::CtrlReg2 => Self::CtrlReg2(CtrlReg2::from_bits(byte)),
            Reg::CtrlReg3 => Self::CtrlReg3(CtrlReg3::from_bits(byte)),
            Reg::FifoCtrl => Self::FifoCtrl(FifoCtrl::from_bits(byte)),
            Reg::FifoWtm => Self::FifoWtm(FifoWtm::from_bits(byte)),
            Reg::I3cIfCtrl => Self::I3cIfCtrl(I3cIfCtrl::from_bits(byte)),
            Reg::IntSource => Self::IntSource(IntSource::from_bits(byte)),
            Reg::FifoStatus2 => Self::FifoStatus2(FifoStatus2::from_bits(byte)),
            Reg::Status => Self::Status(Status::from_bits(byte)),
            other => Self::Byte(other, byte),
        }
    }

    pub fn encode(&self) -> (Reg, u8) {
        match *self {
            Self::InterruptCfg(r) => (Reg::InterruptCfg, r.into_bits()),
            Self::IfCtrl(r) => (Reg::IfCtrl, r.into_bits()),
            Self::CtrlReg1(r) => (Reg::CtrlReg1, r.into_bits()),
            Self::CtrlReg2(r) => (Reg::CtrlReg2, r.into_bits()),
            Self::CtrlReg3(r) => (Reg::CtrlReg3, r.into_bits()),
            Self::FifoCtrl(r) => (Reg::FifoCtrl, r.into_bits()),
            Self::FifoWtm(r) => (Reg::FifoWtm, r.into_bits()),
            Self::I3cIfCtrl(r) => (Reg::I3cIfCtrl, r.into_bits()),
            Self::IntSource(r) => (Reg::IntSource, r.into_bits()),
            Self::FifoStatus2(r) => (Reg::FifoStatus2, r.into_bits()),
            Self::Status(r) => (Reg::Status, r.into_bits()),
            Self::Byte(reg, byte) => (reg, byte),
        }
    }

    pub fn reg(&self) -> Reg {
        self.encode().0
    }
}
