use crate::{BusOperation, DelayNs, Error, Ilps22qs};
use bitfield_struct::bitfield;
use derive_more::TryFrom;

use st_mem_bank_macro::register;

/// Register addresses for ILPS22QS device.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, TryFrom)]
#[try_from(repr)]
pub enum Reg {
    InterruptCfg = 0x0B,
    ThsPL = 0x0C,
    ThsPH = 0x0D,
    IfCtrl = 0x0E,
    WhoAmI = 0x0F,
    CtrlReg1 = 0x10,
    CtrlReg2 = 0x11,
    CtrlReg3 = 0x12,
    FifoCtrl = 0x14,
    FifoWtm = 0x15,
    RefPL = 0x16,
    RefPH = 0x17,
    I3cIfCtrl = 0x19,
    RpdsL = 0x1A,
    RpdsH = 0x1B,
    IntSource = 0x24,
    FifoStatus1 = 0x25,
    FifoStatus2 = 0x26,
    Status = 0x27,
    PressOutXl = 0x28,
    PressOutL = 0x29,
    PressOutH = 0x2A,
    TempOutL = 0x2B,
    TempOutH = 0x2C,
    AnalogicHubDisable = 0x5F,
    FifoDataOutPressXl = 0x78,
    FifoDataOutPressL = 0x79,
    FifoDataOutPressH = 0x7A,
}

/// INTERRUPT_CFG (0x0B)
///
/// Interrupt mode for pressure acquisition configuration (R/W)
#[register(address = Reg::InterruptCfg, access_type = Ilps22qs, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
#[derive(PartialEq, Eq)]
pub struct InterruptCfg {
    /// Enable interrupt generation on pressure high event (1 bit)
    /// (0: disable interrupt request; 1: enable interrupt request on pressure value higher than preset threshold)
    #[bits(1)]
    pub phe: u8,
    /// Enable interrupt generation on pressure low event (1 bit)
    /// (0: disable interrupt request; 1: enable interrupt request on pressure value lower than preset threshold)
    #[bits(1)]
    pub ple: u8,
    /// Latch interrupt request to the INT_SOURCE register (1 bit)
    /// (0: interrupt request not latched; 1: interrupt request latched)
    #[bits(1)]
    pub lir: u8,
    #[bits(1, access = RO)]
    pub not_used_01: u8,
    /// Reset AUTOZERO function (1 bit)
    /// (0: normal mode; 1: reset AUTOZERO function)
    #[bits(1)]
    pub reset_az: u8,
    /// Enable AUTOZERO function (1 bit)
    /// (0: normal mode; 1: AUTOZERO enabled)
    #[bits(1)]
    pub autozero: u8,
    /// Reset AUTOREFP function (1 bit)
    /// (0: normal mode; 1: reset AUTOREFP function)
    #[bits(1)]
    pub reset_arp: u8,
    /// Enable AUTOREFP function (1 bit)
    /// (0: normal mode; 1: AUTOREFP enabled)
    #[bits(1)]
    pub autorefp: u8,
}

/// THS_P_L - THS_P_H (0x0C - 0x0D)
///
/// User-defined threshold value for pressure interrupt event (R/W)
/// THS_P (15-bit unsigned) = threshold (hPa) × 16 at 1260 hPa full scale,
/// threshold (hPa) × 8 at 4000 hPa full scale.
#[register(address = Reg::ThsPL, access_type = Ilps22qs, generics = 2, override_type = u16)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u16, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u16, order = Lsb))]
#[derive(PartialEq, Eq)]
pub struct ThsP {
    #[bits(15)]
    pub ths: u16,
    #[bits(1, access = RO)]
    pub not_used_01: u8,
}

/// IF_CTRL (0x0E)
///
/// Interface control register (R/W)
#[register(address = Reg::IfCtrl, access_type = Ilps22qs, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
#[derive(PartialEq, Eq)]
pub struct IfCtrl {
    #[bits(1, access = RO)]
    pub not_used_01: u8,
    /// Disable pull-up on the CS pin (1 bit)
    /// (0: CS pin with pull-up; 1: CS pin pull-up disconnected)
    #[bits(1)]
    pub cs_pu_dis: u8,
    #[bits(2, access = RO)]
    pub not_used_02: u8,
    /// Enable pull-up on the SDA pin (1 bit)
    /// (0: SDA pin pull-up disconnected; 1: SDA pin with pull-up)
    #[bits(1)]
    pub sda_pu_en: u8,
    /// Enable SPI read on 3-wire interface (1 bit)
    /// (0: disabled; 1: SDI/SDO share the same pin)
    #[bits(1)]
    pub en_spi_read: u8,
    /// Disable I²C and I3C digital interfaces (1 bit)
    /// (0: enable I²C and I3C digital interfaces; 1: disable I²C and I3C digital interfaces)
    #[bits(1)]
    pub i2c_i3c_dis: u8,
    #[bits(1, access = RO)]
    pub not_used_03: u8,
}

/// WHO_AM_I (0x0F)
///
/// WHO_AM_I register (R), read-only, fixed value 0xB4.
#[register(address = Reg::WhoAmI, access_type = Ilps22qs, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct WhoAmI {
    /// Device identification value.
    #[bits(8)]
    pub id: u8,
}

/// CTRL_REG1 (0x10)
///
/// Control register 1 (R/W)
#[register(address = Reg::CtrlReg1, access_type = Ilps22qs, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
#[derive(PartialEq, Eq)]
pub struct CtrlReg1 {
    /// Averaging selection for pressure and temperature (3 bits)
    #[bits(3)]
    pub avg: u8,
    /// Output data rate selection (4 bits)
    #[bits(4)]
    pub odr: u8,
    #[bits(1, access = RO)]
    pub not_used_01: u8,
}

/// CTRL_REG2 (0x11)
///
/// Control register 2 (R/W)
#[register(address = Reg::CtrlReg2, access_type = Ilps22qs, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
#[derive(PartialEq, Eq)]
pub struct CtrlReg2 {
    /// Enable one-shot mode (1 bit)
    /// (0: idle mode; 1: a new dataset is acquired)
    #[bits(1)]
    pub oneshot: u8,
    #[bits(1, access = RO)]
    pub not_used_01: u8,
    /// Software reset (1 bit)
    /// (0: normal mode; 1: software reset, self-clears when reset is completed)
    #[bits(1)]
    pub swreset: u8,
    /// Block data update (1 bit)
    /// (0: continuous update; 1: output registers not updated until MSB and LSB have been read)
    #[bits(1)]
    pub bdu: u8,
    /// Enable low-pass filter on pressure data (1 bit)
    /// (0: disable; 1: enable)
    #[bits(1)]
    pub en_lpfp: u8,
    /// Low-pass filter configuration (1 bit)
    /// (0: ODR/4; 1: ODR/9)
    #[bits(1)]
    pub lfpf_cfg: u8,
    /// Full-scale selection (1 bit)
    /// (0: 1260 hPa; 1: 4000 hPa)
    #[bits(1)]
    pub fs_mode: u8,
    /// Reboot memory content (1 bit)
    /// (0: normal mode; 1: reboot memory content, self-clears after boot)
    #[bits(1)]
    pub boot: u8,
}

/// CTRL_REG3 (0x12)
///
/// Control register 3 (R/W)
#[register(address = Reg::CtrlReg3, access_type = Ilps22qs, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
#[derive(PartialEq, Eq)]
pub struct CtrlReg3 {
    /// Register address automatically incremented during multiple byte access (1 bit)
    /// (0: disable; 1: enable)
    #[bits(1)]
    pub if_add_inc: u8,
    #[bits(4, access = RO)]
    pub not_used_01: u8,
    /// Interleaved pressure and AH/Qvar acquisition (1 bit)
    /// (0: disable; 1: enable)
    #[bits(1)]
    pub ah_qvar_p_auto_en: u8,
    #[bits(1, access = RO)]
    pub not_used_02: u8,
    /// Enable AH/Qvar analog hub (1 bit)
    /// (0: disable; 1: enable)
    #[bits(1)]
    pub ah_qvar_en: u8,
}

/// FIFO_CTRL (0x14)
///
/// FIFO control register (R/W)
#[register(address = Reg::FifoCtrl, access_type = Ilps22qs, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
#[derive(PartialEq, Eq)]
pub struct FifoCtrl {
    /// FIFO mode selection (2 bits)
    #[bits(2)]
    pub f_mode: u8,
    /// Enables triggered FIFO modes (1 bit)
    #[bits(1)]
    pub trig_modes: u8,
    /// Stop-on-FIFO watermark (1 bit)
    /// Enables FIFO watermark level use
    #[bits(1)]
    pub stop_on_wtm: u8,
    /// Store AH/Qvar samples in FIFO when interleaved (1 bit)
    #[bits(1)]
    pub ah_qvar_p_fifo_en: u8,
    #[bits(3, access = RO)]
    pub not_used_01: u8,
}

/// FIFO_WTM (0x15)
///
/// FIFO threshold setting register (R/W)
#[register(address = Reg::FifoWtm, access_type = Ilps22qs, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
#[derive(PartialEq, Eq)]
pub struct FifoWtm {
    /// FIFO threshold watermark level (7 bits)
    #[bits(7)]
    pub wtm: u8,
    #[bits(1, access = RO)]
    pub not_used_01: u8,
}

/// REF_P_L - REF_P_H (0x16 - 0x17)
///
/// Reference pressure (R)
/// Reference value used by the AUTOZERO and AUTOREFP functions, two's complement.
#[register(address = Reg::RefPL, access_type = Ilps22qs, generics = 2, override_type = u16)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u16, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u16, order = Lsb))]
pub struct RefP {
    #[bits(16)]
    pub refp: i16,
}

/// I3C_IF_CTRL (0x19)
///
/// Interface configuration register (R/W)
#[register(address = Reg::I3cIfCtrl, access_type = Ilps22qs, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
#[derive(PartialEq, Eq)]
pub struct I3cIfCtrl {
    #[bits(5, access = RO)]
    pub not_used_02: u8,
    /// Enables antispike filters (1 bit)
    /// (0: antispike filters managed by protocol; 1: antispike filters always enabled)
    #[bits(1)]
    pub asf_on: u8,
    #[bits(2, access = RO)]
    pub not_used_01: u8,
}

/// RPDS_L - RPDS_H (0x1A - 0x1B)
///
/// Pressure offset (R/W)
#[register(address = Reg::RpdsL, access_type = Ilps22qs, generics = 2, override_type = u16)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u16, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u16, order = Lsb))]
pub struct Rpds {
    #[bits(16)]
    pub offset: i16,
}

/// INT_SOURCE (0x24)
///
/// Interrupt source register (read only)
#[register(address = Reg::IntSource, access_type = Ilps22qs, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
#[derive(PartialEq, Eq)]
pub struct IntSource {
    /// Differential pressure high event (1 bit)
    #[bits(1)]
    pub ph: u8,
    /// Differential pressure low event (1 bit)
    #[bits(1)]
    pub pl: u8,
    /// Interrupt active (1 bit)
    /// (0: no interrupt generated; 1: one or more interrupt events generated)
    #[bits(1)]
    pub ia: u8,
    #[bits(4, access = RO)]
    pub not_used_01: u8,
    /// Boot phase indication (1 bit)
    /// (0: boot phase not running; 1: boot phase running)
    #[bits(1)]
    pub boot_on: u8,
}

/// FIFO_STATUS1 (0x25)
///
/// FIFO status register (read only)
/// Number of unread samples stored in the FIFO buffer.
/// 0x00 means FIFO empty; 0x80 means FIFO full with 128 unread samples.
#[register(address = Reg::FifoStatus1, access_type = Ilps22qs, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FifoStatus1 {
    #[bits(8)]
    pub fss: u8,
}

/// FIFO_STATUS2 (0x26)
///
/// FIFO status register (read only)
#[register(address = Reg::FifoStatus2, access_type = Ilps22qs, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
#[derive(PartialEq, Eq)]
pub struct FifoStatus2 {
    #[bits(5, access = RO)]
    pub not_used_01: u8,
    /// FIFO full interrupt active (1 bit)
    /// (0: FIFO not full; 1: FIFO full)
    #[bits(1)]
    pub fifo_full_ia: u8,
    /// FIFO overrun interrupt active (1 bit)
    /// (0: no overrun; 1: FIFO slot overwritten)
    #[bits(1)]
    pub fifo_ovr_ia: u8,
    /// FIFO watermark interrupt active (1 bit)
    /// (0: FIFO below watermark; 1: FIFO equal or above watermark)
    #[bits(1)]
    pub fifo_wtm_ia: u8,
}

/// STATUS (0x27)
///
/// Status register (read only)
#[register(address = Reg::Status, access_type = Ilps22qs, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
#[derive(PartialEq, Eq)]
pub struct Status {
    /// Pressure data available (1 bit)
    #[bits(1)]
    pub p_da: u8,
    /// Temperature data available (1 bit)
    #[bits(1)]
    pub t_da: u8,
    #[bits(2, access = RO)]
    pub not_used_01: u8,
    /// Pressure data overrun (1 bit)
    #[bits(1)]
    pub p_or: u8,
    /// Temperature data overrun (1 bit)
    #[bits(1)]
    pub t_or: u8,
    #[bits(2, access = RO)]
    pub not_used_02: u8,
}

/// PRESS_OUT_XL - PRESS_OUT_L - PRESS_OUT_H (0x28 - 0x2A)
///
/// 24-bit two's complement pressure output, composed of PRESS_OUT_H (2Ah),
/// PRESS_OUT_L (29h) and PRESS_OUT_XL (28h), held left-aligned so that the
/// sign lands on bit 31.
///
/// In interleaved mode bit 0 of PRESS_OUT_XL tags the sample: 0 for pressure,
/// 1 for AH/Qvar.
#[register(address = Reg::PressOutXl, access_type = Ilps22qs, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u32, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u32, order = Lsb))]
#[derive(PartialEq, Eq)]
pub struct PressOut {
    #[offset_before(8)]
    #[bits(32)]
    pub pressure: i32,
}

impl PressOut {
    /// Rebuild the output from the XL, L, H bytes of a burst read.
    pub const fn from_output(buf: [u8; 3]) -> Self {
        Self::from_bits(u32::from_le_bytes([0, buf[0], buf[1], buf[2]]))
    }

    /// Sign-extended 24-bit sample.
    pub const fn lsb(&self) -> i32 {
        self.pressure() >> 8
    }

    pub const fn is_ah_qvar(&self) -> bool {
        self.lsb() & 0x01 == 0x01
    }
}

/// TEMP_OUT_L - TEMP_OUT_H (0x2B - 0x2C)
///
/// 16-bit two's complement temperature output, 1 LSB = 0.01 °C.
#[register(address = Reg::TempOutL, access_type = Ilps22qs, generics = 2, override_type = u16)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u16, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u16, order = Lsb))]
pub struct TempOut {
    #[bits(16)]
    pub temp_c: i16,
}

/// ANALOGIC_HUB_DISABLE (0x5F)
///
/// Writing 0x00 switches the analog hub front-end off.
#[register(address = Reg::AnalogicHubDisable, access_type = Ilps22qs, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct AnalogicHubDisable {
    #[bits(8)]
    pub val: u8,
}

/// FIFO_DATA_OUT_PRESS_XL - FIFO_DATA_OUT_PRESS_L - FIFO_DATA_OUT_PRESS_H (0x78 - 0x7A)
///
/// FIFO output, same layout as PRESS_OUT. Each read pops one slot.
#[register(address = Reg::FifoDataOutPressXl, access_type = Ilps22qs, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u32, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u32, order = Lsb))]
pub struct FifoDataOutPress {
    #[offset_before(8)]
    #[bits(32)]
    pub pressure: i32,
}

impl FifoDataOutPress {
    pub const fn lsb(&self) -> i32 {
        self.pressure() >> 8
    }

    pub const fn is_ah_qvar(&self) -> bool {
        self.lsb() & 0x01 == 0x01
    }
}

/// Interface selection options for the device communication interface.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Debug, Default, TryFrom)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[try_from(repr)]
pub enum Interface {
    /// Bus mode selected by hardware, SPI 3-wire disabled (default)
    #[default]
    SelByHw = 0x00,
    /// SPI only, SDO and SDI share the same pin
    Spi3w = 0x03,
}

/// Filter configuration for antispike filters.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Debug, Default, TryFrom)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[try_from(repr)]
pub enum Filter {
    /// Antispike filter managed automatically by protocol (default)
    #[default]
    FilterAuto = 0x00,
    /// Antispike filter always enabled
    FilterAlwaysOn = 0x01,
}

/// Device initialization actions.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Debug, TryFrom)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[try_from(repr)]
pub enum Init {
    /// Set BDU and IF_ADD_INC for driver usage
    DrvRdy = 0x00,
    /// Restore calibration parameters (takes 10 ms)
    Boot = 0x01,
    /// Reset configuration registers
    Reset = 0x02,
}

/// Pressure full-scale range.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Debug, Default, TryFrom)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[try_from(repr)]
pub enum Fs {
    /// 1260 hPa full scale, 4096 LSB/hPa (default)
    #[default]
    _1260hpa = 0x00,
    /// 4000 hPa full scale, 2048 LSB/hPa
    _4000hpa = 0x01,
}

/// Output Data Rate (ODR) settings for pressure and temperature data.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Debug, Default, TryFrom)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[try_from(repr)]
pub enum Odr {
    /// One-shot mode, power down until software trigger (default)
    #[default]
    OneShot = 0x00,
    /// 1 Hz output data rate
    _1hz = 0x01,
    /// 4 Hz output data rate
    _4hz = 0x02,
    /// 10 Hz output data rate
    _10hz = 0x03,
    /// 25 Hz output data rate
    _25hz = 0x04,
    /// 50 Hz output data rate
    _50hz = 0x05,
    /// 75 Hz output data rate
    _75hz = 0x06,
    /// 100 Hz output data rate
    _100hz = 0x07,
    /// 200 Hz output data rate
    _200hz = 0x08,
}

/// Averaging settings for pressure and temperature measurements.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Debug, Default, TryFrom)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[try_from(repr)]
pub enum Avg {
    /// Average over 4 samples (default)
    #[default]
    _4 = 0,
    /// Average over 8 samples
    _8 = 1,
    /// Average over 16 samples
    _16 = 2,
    /// Average over 32 samples
    _32 = 3,
    /// Average over 64 samples
    _64 = 4,
    /// Average over 128 samples
    _128 = 5,
    /// Average over 256 samples
    _256 = 6,
    /// Average over 512 samples
    _512 = 7,
}

/// Low-pass filter configuration options.
///
/// Bit 0 maps on EN_LPFP, bit 1 on LFPF_CFG. A divisor without the enable
/// bit has no variant.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Debug, Default, TryFrom)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[try_from(repr)]
pub enum LowPassFilter {
    /// Low-pass filter disabled (default)
    #[default]
    Disable = 0,
    /// Low-pass filter cutoff frequency at ODR/4
    OdrDiv4 = 1,
    /// Low-pass filter cutoff frequency at ODR/9
    OdrDiv9 = 3,
}

/// FIFO operating modes.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Debug, Default, TryFrom)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[try_from(repr)]
pub enum Operation {
    /// Bypass mode (FIFO disabled)
    #[default]
    Bypass = 0,
    /// FIFO mode (store data until full)
    Fifo = 1,
    /// Continuous (dynamic-stream) mode
    Stream = 2,
    /// Continuous (dynamic-stream), FIFO on trigger
    StreamToFifo = 7,
    /// Bypass, continuous (dynamic-stream) on trigger
    BypassToStream = 6,
    /// Bypass, FIFO on trigger
    BypassToFifo = 5,
}

/// Reference application modes for pressure offset and interrupt generation.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Debug, Default, TryFrom)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[try_from(repr)]
pub enum ApplyRef {
    /// Apply reference to output and interrupt generation
    #[default]
    OutAndInterrupt = 0,
    /// Apply reference only to interrupt generation
    OnlyInterrupt = 1,
    /// Reset reference registers
    RstRefs = 2,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusMode {
    pub interface: Interface,
    pub filter: Filter,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stat {
    /// Restoring configuration registers
    pub sw_reset: u8,
    /// Restoring calibration parameters
    pub boot: u8,
    pub drdy_pres: u8,
    pub drdy_temp: u8,
    pub ovr_pres: u8,
    pub ovr_temp: u8,
    /// Single measurement is finished
    pub end_meas: u8,
    /// Auto-zero value is set
    pub ref_done: u8,
}

/// Pull-up configuration. 1 = pull-up enabled.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConf {
    pub sda_pull_up: u8,
    pub cs_pull_up: u8,
}

impl Default for PinConf {
    fn default() -> Self {
        // power-on state of IF_CTRL: CS pull-up connected, SDA pull-up off
        Self {
            sda_pull_up: 0,
            cs_pull_up: 1,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AllSources {
    pub drdy_pres: u8,
    pub drdy_temp: u8,
    pub over_pres: u8,
    pub under_pres: u8,
    pub thrsld_pres: u8,
    pub fifo_full: u8,
    pub fifo_ovr: u8,
    pub fifo_th: u8,
}

/// Conversion parameters.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Md {
    /// Alternate pressure and AH/Qvar samples (0: off; 1: on)
    pub interleaved_mode: u8,
    pub fs: Fs,
    pub odr: Odr,
    pub avg: Avg,
    pub lpf: LowPassFilter,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoMd {
    pub operation: Operation,
    /// 0 disables the watermark, 1..=127 otherwise.
    pub watermark: u8,
}

/// FIFO fill level with the FIFO_STATUS2 flags kept apart.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoStatus {
    /// Unread samples, 0..=128
    pub level: u8,
    pub full: u8,
    pub ovr: u8,
    pub wtm: u8,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoData {
    pub hpa: f32,
    /// 24-bit sample, sign extended
    pub raw: i32,
    /// AH/Qvar sample when interleaved, 0 for pressure samples
    pub lsb: i32,
}

/// Interrupt events are: int on threshold, FIFO.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntMode {
    pub int_latched: u8,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntThMd {
    /// Threshold in hPa × 16 (1260 hPa) or hPa × 8 (4000 hPa), 15 bits
    pub threshold: u16,
    pub over_th: u8,
    pub under_th: u8,
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefMd {
    pub apply_ref: ApplyRef,
    /// Use current pressure value as reference
    pub get_ref: u8,
}

#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pressure {
    pub hpa: f32,
    pub raw: i32, // 24-bit sample, sign extended
}

#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Heat {
    pub deg_c: f32,
    pub raw: i16,
}

#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AhQvar {
    pub lsb: i32,
}

#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Data {
    pub pressure: Pressure,
    pub heat: Heat,
    pub ah_qvar: AhQvar,
}

#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AhQvarData {
    /// value converted in mV
    pub mv: f32,
    /// PRESS_OUT left-aligned in 32 bits
    pub raw: i32,
    /// 24-bit sample, sign extended
    pub lsb: i32,
}
