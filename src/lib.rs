#![no_std]
#![doc = include_str!("../README.md")]
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, SevenBitAddress};
use embedded_hal::spi::SpiDevice;
use st_mems_bus::{BusOperation, i2c, spi};

pub mod conversion;
pub mod prelude;
pub mod register;

use prelude::*;

/// Driver for ILPS22QS sensor.
///
/// The struct takes a bus to write to the registers.
/// The bus is generalized over the BusOperation trait, allowing the use
/// of I2C or SPI protocols; this also allows the user to implement sharing
/// techniques to share the underlying bus.
///
/// The driver keeps no copy of the device configuration: every call reads the
/// registers it needs. Concurrent access to one device must be serialized by
/// the caller.
pub struct Ilps22qs<B, T> {
    pub bus: B,
    pub tim: T,
}

/// Driver errors.
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<B> {
    Bus(B),               // Error at the bus level, passed through unchanged
    InvalidConfiguration, // Parameters outside the documented set, nothing written
    NotReady,             // Device state incompatible with the request
}

impl<B, T> Ilps22qs<B, T>
where
    B: BusOperation,
    T: DelayNs,
{
    /// Constructor method based on general BusOperation implementation.
    pub fn new_bus(bus: B, tim: T) -> Self {
        Self { bus, tim }
    }

    /// Give back the bus and the timer.
    pub fn release(self) -> (B, T) {
        (self.bus, self.tim)
    }
}
impl<P, T> Ilps22qs<i2c::I2cBus<P>, T>
where
    P: I2c,
    T: DelayNs,
{
    /// Constructor method for using the I2C bus.
    pub fn new_i2c(i2c: P, address: I2CAddress, tim: T) -> Self {
        // Initialize the I2C bus with the COMPONENT address
        let bus = i2c::I2cBus::new(i2c, address as SevenBitAddress);
        Self { bus, tim }
    }
}
impl<P, T> Ilps22qs<spi::SpiBus<P>, T>
where
    P: SpiDevice,
    T: DelayNs,
{
    /// Constructor method for using the SPI bus.
    pub fn new_spi(spi: P, tim: T) -> Self {
        let bus = spi::SpiBus::new(spi);
        Self { bus, tim }
    }
}

impl<B: BusOperation, T: DelayNs> Ilps22qs<B, T> {
    #[inline]
    pub fn read_from_register(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Error<B::Error>> {
        self.bus.read_from_register(reg, buf).map_err(Error::Bus)
    }

    #[inline]
    pub fn write_to_register(&mut self, reg: u8, buf: &[u8]) -> Result<(), Error<B::Error>> {
        self.bus.write_to_register(reg, buf).map_err(Error::Bus)
    }

    /// Get Device id: WHO_AM_I (0x0F)
    ///
    /// Device identification register (read only).
    /// Compare the result with [`ID`] to confirm the device is present.
    pub fn id_get(&mut self) -> Result<u8, Error<B::Error>> {
        WhoAmI::read(self).map(|reg| reg.id())
    }

    /// Read one register and decode it by address.
    ///
    /// Addresses outside the register map are rejected without bus traffic.
    pub fn register_get(&mut self, address: u8) -> Result<RegisterView, Error<B::Error>> {
        let reg = Reg::try_from(address).map_err(|_| Error::InvalidConfiguration)?;
        let mut buf = [0u8; 1];
        self.read_from_register(reg as u8, &mut buf)?;

        Ok(RegisterView::decode(reg, buf[0]))
    }

    /// Configures the bus operating mode.
    ///
    /// Selects SPI 3-wire or hardware-selected interface (IF_CTRL) and the
    /// antispike filter behavior (I3C_IF_CTRL).
    pub fn bus_mode_set(&mut self, val: &BusMode) -> Result<(), Error<B::Error>> {
        let mut if_ctrl = IfCtrl::read(self)?;
        if_ctrl.set_i2c_i3c_dis(((val.interface as u8) & 0x02) >> 1);
        if_ctrl.set_en_spi_read((val.interface as u8) & 0x01);
        if_ctrl.write(self)?;

        let mut i3c_if_ctrl = I3cIfCtrl::read(self)?;
        i3c_if_ctrl.set_asf_on((val.filter as u8) & 0x01);
        i3c_if_ctrl.write(self)?;

        Ok(())
    }

    /// Retrieve the bus operating mode.
    pub fn bus_mode_get(&mut self) -> Result<BusMode, Error<B::Error>> {
        let if_ctrl = IfCtrl::read(self)?;
        let i3c_if_ctrl = I3cIfCtrl::read(self)?;

        let interface = (if_ctrl.i2c_i3c_dis() << 1) | if_ctrl.en_spi_read();
        let interface = Interface::try_from(interface).unwrap_or_default();
        let filter = Filter::try_from(i3c_if_ctrl.asf_on()).unwrap_or_default();

        Ok(BusMode { interface, filter })
    }

    /// Device initialization and reset control.
    ///
    /// - `Init::Boot`: reboots the memory content to restore the calibration
    ///   parameters; waits 10 ms, then polls INT_SOURCE.BOOT_ON.
    /// - `Init::Reset`: software reset of the configuration registers; polls
    ///   CTRL_REG2.SWRESET until it self-clears.
    /// - `Init::DrvRdy`: enables block data update and automatic register
    ///   address increment for multi-byte access.
    ///
    /// Returns `Error::NotReady` if boot or reset does not complete.
    pub fn init_set(&mut self, val: Init) -> Result<(), Error<B::Error>> {
        let mut reg: [u8; 2] = [0, 0];
        self.read_from_register(Reg::CtrlReg2 as u8, &mut reg)?;
        let mut ctrl_reg2 = CtrlReg2::from_bits(reg[0]);
        let mut ctrl_reg3 = CtrlReg3::from_bits(reg[1]);
        let mut cnt: u8 = 0;

        match val {
            Init::Boot => {
                ctrl_reg2.set_boot(1);
                ctrl_reg2.write(self)?;

                loop {
                    self.tim.delay_ms(BOOT_TIME_MS);

                    if IntSource::read(self)?.boot_on() == 0 {
                        break;
                    }

                    if cnt >= 5 {
                        #[cfg(feature = "defmt")]
                        defmt::warn!("ilps22qs: boot did not complete");
                        return Err(Error::NotReady);
                    }

                    cnt += 1;
                }
            }
            Init::Reset => {
                ctrl_reg2.set_swreset(1);
                ctrl_reg2.write(self)?;

                loop {
                    if CtrlReg2::read(self)?.swreset() == 0 {
                        break;
                    }

                    self.tim.delay_ms(BOOT_TIME_MS);

                    if cnt >= 5 {
                        #[cfg(feature = "defmt")]
                        defmt::warn!("ilps22qs: software reset did not complete");
                        return Err(Error::NotReady);
                    }

                    cnt += 1;
                }
            }
            Init::DrvRdy => {
                ctrl_reg2.set_bdu(1);
                ctrl_reg3.set_if_add_inc(1);
                // CTRL_REG2 and CTRL_REG3 go out in the same transaction
                reg[0] = ctrl_reg2.into_bits();
                reg[1] = ctrl_reg3.into_bits();
                self.write_to_register(Reg::CtrlReg2 as u8, &reg)?;
            }
        }

        Ok(())
    }

    /// Device status retrieval.
    ///
    /// Reads multiple status-related registers to provide comprehensive device status information:
    /// - Software reset completion status.
    /// - Boot phase status.
    /// - Pressure and temperature data ready flags.
    /// - Pressure and temperature data overrun flags.
    /// - One-shot measurement completion status.
    /// - AUTOZERO reference completion status.
    pub fn status_get(&mut self) -> Result<Stat, Error<B::Error>> {
        let ctrl_reg2 = CtrlReg2::read(self)?;
        let int_source = IntSource::read(self)?;
        let status = Status::read(self)?;
        let interrupt_cfg = InterruptCfg::read(self)?;

        Ok(Stat {
            sw_reset: ctrl_reg2.swreset(),
            boot: int_source.boot_on(),
            drdy_pres: status.p_da(),
            drdy_temp: status.t_da(),
            ovr_pres: status.p_or(),
            ovr_temp: status.t_or(),
            end_meas: (ctrl_reg2.oneshot() == 0) as u8,
            ref_done: (interrupt_cfg.autozero() == 0) as u8,
        })
    }

    /// Electrical pin configuration setter.
    ///
    /// Configures the SDA pull-up and the CS pull-up in IF_CTRL.
    pub fn pin_conf_set(&mut self, val: &PinConf) -> Result<(), Error<B::Error>> {
        let mut if_ctrl = IfCtrl::read(self)?;

        if_ctrl.set_sda_pu_en(val.sda_pull_up & 0x01);
        if_ctrl.set_cs_pu_dis(((val.cs_pull_up & 0x01) == 0) as u8);

        if_ctrl.write(self)
    }

    /// Get Electrical pin configuration.
    pub fn pin_conf_get(&mut self) -> Result<PinConf, Error<B::Error>> {
        let if_ctrl = IfCtrl::read(self)?;

        Ok(PinConf {
            sda_pull_up: if_ctrl.sda_pu_en(),
            cs_pull_up: (if_ctrl.cs_pu_dis() == 0) as u8,
        })
    }

    /// Retrieve status of all interrupt sources.
    ///
    /// Reads STATUS, INT_SOURCE, and FIFO_STATUS2 registers to provide a snapshot of all interrupt flags,
    /// including data-ready, threshold, FIFO full, FIFO overrun, and watermark interrupts.
    pub fn all_sources_get(&mut self) -> Result<AllSources, Error<B::Error>> {
        let status = Status::read(self)?;
        let int_source = IntSource::read(self)?;
        let fifo_status2 = FifoStatus2::read(self)?;

        let val = AllSources {
            drdy_pres: status.p_da(),
            drdy_temp: status.t_da(),
            over_pres: int_source.ph(),
            under_pres: int_source.pl(),
            thrsld_pres: int_source.ia(),
            fifo_full: fifo_status2.fifo_full_ia(),
            fifo_ovr: fifo_status2.fifo_ovr_ia(),
            fifo_th: fifo_status2.fifo_wtm_ia(),
        };

        Ok(val)
    }

    /// Select conversion parameters.
    ///
    /// Sets full scale, output data rate, averaging and low-pass filter in CTRL_REG1/CTRL_REG2,
    /// keeps IF_ADD_INC enabled and applies the interleaved AH/Qvar mode to CTRL_REG3 and FIFO_CTRL.
    /// `interleaved_mode` other than 0 or 1 is rejected before any bus access.
    pub fn mode_set(&mut self, val: &Md) -> Result<(), Error<B::Error>> {
        if val.interleaved_mode > 1 {
            #[cfg(feature = "defmt")]
            defmt::debug!("ilps22qs: invalid interleaved mode {}", val.interleaved_mode);
            return Err(Error::InvalidConfiguration);
        }

        let mut reg: [u8; 3] = [0; 3];
        self.read_from_register(Reg::CtrlReg1 as u8, &mut reg)?;
        let mut ctrl_reg1 = CtrlReg1::from_bits(reg[0]);
        let mut ctrl_reg2 = CtrlReg2::from_bits(reg[1]);
        let mut ctrl_reg3 = CtrlReg3::from_bits(reg[2]);

        ctrl_reg1.set_odr(val.odr as u8);
        ctrl_reg1.set_avg(val.avg as u8);
        ctrl_reg2.set_en_lpfp(val.lpf as u8 & 0x01);
        ctrl_reg2.set_lfpf_cfg((val.lpf as u8 & 0x02) >> 1);
        ctrl_reg2.set_fs_mode(val.fs as u8);
        ctrl_reg3.set_if_add_inc(1);
        ctrl_reg3.set_ah_qvar_p_auto_en(val.interleaved_mode);

        reg[0] = ctrl_reg1.into_bits();
        reg[1] = ctrl_reg2.into_bits();
        reg[2] = ctrl_reg3.into_bits();
        self.write_to_register(Reg::CtrlReg1 as u8, &reg)?;

        let mut fifo_ctrl = FifoCtrl::read(self)?;
        fifo_ctrl.set_ah_qvar_p_fifo_en(val.interleaved_mode);
        fifo_ctrl.write(self)?;

        Ok(())
    }

    /// Get sensor conversion parameters.
    ///
    /// A filter divisor bit without the enable bit reads back as `LowPassFilter::Disable`.
    pub fn mode_get(&mut self) -> Result<Md, Error<B::Error>> {
        let mut reg: [u8; 3] = [0; 3];
        self.read_from_register(Reg::CtrlReg1 as u8, &mut reg)?;
        let ctrl_reg1 = CtrlReg1::from_bits(reg[0]);
        let ctrl_reg2 = CtrlReg2::from_bits(reg[1]);
        let ctrl_reg3 = CtrlReg3::from_bits(reg[2]);

        let fs = Fs::try_from(ctrl_reg2.fs_mode()).unwrap_or_default();
        let odr = Odr::try_from(ctrl_reg1.odr()).unwrap_or_default();
        let avg = Avg::try_from(ctrl_reg1.avg()).unwrap_or_default();
        let lpf = if ctrl_reg2.en_lpfp() == 0 {
            LowPassFilter::Disable
        } else {
            let lpf = (ctrl_reg2.lfpf_cfg() << 1) | ctrl_reg2.en_lpfp();
            LowPassFilter::try_from(lpf).unwrap_or_default()
        };

        Ok(Md {
            interleaved_mode: ctrl_reg3.ah_qvar_p_auto_en(),
            fs,
            odr,
            avg,
            lpf,
        })
    }

    /// Software trigger for One-Shot mode.
    ///
    /// Starts a single pressure and temperature measurement. Returns
    /// `Error::NotReady` without touching the bus when `md.odr` is not one-shot.
    /// Completion is reported by `status_get().end_meas`.
    pub fn trigger_sw(&mut self, md: &Md) -> Result<(), Error<B::Error>> {
        if md.odr != Odr::OneShot {
            #[cfg(feature = "defmt")]
            defmt::debug!("ilps22qs: software trigger outside one-shot mode");
            return Err(Error::NotReady);
        }

        let mut ctrl_reg2 = CtrlReg2::read(self)?;
        ctrl_reg2.set_oneshot(1);
        ctrl_reg2.write(self)
    }

    /// Sensor data retrieval.
    ///
    /// One 5-byte read of PRESS_OUT (0x28 - 0x2A) and TEMP_OUT (0x2B - 0x2C). Pressure is scaled
    /// by `md.fs`. In interleaved mode a sample tagged as AH/Qvar fills `ah_qvar` instead of
    /// `pressure.hpa`.
    pub fn data_get(&mut self, md: &Md) -> Result<Data, Error<B::Error>> {
        let mut buff: [u8; 5] = [0; 5];
        self.read_from_register(Reg::PressOutXl as u8, &mut buff)?;

        let press_out = PressOut::from_output([buff[0], buff[1], buff[2]]);
        let temp_out = TempOut::from_bits(u16::from_le_bytes([buff[3], buff[4]]));

        let mut data = Data::default();
        data.pressure.raw = press_out.lsb();
        if md.interleaved_mode == 1 && press_out.is_ah_qvar() {
            data.ah_qvar.lsb = press_out.lsb();
        } else {
            data.pressure.hpa = from_lsb_to_hpa(press_out.lsb(), md.fs);
        }

        data.heat.raw = temp_out.temp_c();
        data.heat.deg_c = from_lsb_to_celsius(data.heat.raw);

        Ok(data)
    }

    /// Pressure output raw value getter.
    ///
    /// Reads the 24-bit raw pressure output registers and returns the value left-aligned in a 32-bit integer.
    pub fn pressure_raw_get(&mut self) -> Result<u32, Error<B::Error>> {
        Ok(PressOut::read(self)?.into_bits())
    }

    /// Temperature output raw value getter.
    pub fn temperature_raw_get(&mut self) -> Result<i16, Error<B::Error>> {
        TempOut::read(self).map(|reg| reg.temp_c())
    }

    /// AH/Qvar data retrieval.
    ///
    /// Reads the analog hub sample from PRESS_OUT (0x28 - 0x2A) and converts it to mV.
    pub fn ah_qvar_data_get(&mut self) -> Result<AhQvarData, Error<B::Error>> {
        let press_out = PressOut::read(self)?;
        let lsb = press_out.lsb();

        Ok(AhQvarData {
            mv: from_lsb_to_mv(lsb),
            raw: press_out.into_bits() as i32,
            lsb,
        })
    }

    /// Enable or disable the AH/Qvar analog hub (CTRL_REG3.AH_QVAR_EN).
    pub fn ah_qvar_en_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl_reg3 = CtrlReg3::read(self)?;
        ctrl_reg3.set_ah_qvar_en(val & 0x01);
        ctrl_reg3.write(self)
    }

    /// Retrieve the AH/Qvar analog hub enable (CTRL_REG3.AH_QVAR_EN).
    pub fn ah_qvar_en_get(&mut self) -> Result<u8, Error<B::Error>> {
        CtrlReg3::read(self).map(|reg| reg.ah_qvar_en())
    }

    /// Switch the analog hub front-end off (ANALOGIC_HUB_DISABLE, full overwrite with 0x00).
    pub fn ah_qvar_disable(&mut self) -> Result<(), Error<B::Error>> {
        AnalogicHubDisable::new().write(self)
    }

    /// Set FIFO operation mode and watermark level.
    ///
    /// Configures FIFO_CTRL (0x14) and FIFO_WTM (0x15) in one transaction. STOP_ON_WTM follows
    /// the watermark: set when it is non-zero. A watermark above 127 is rejected before any bus
    /// access.
    pub fn fifo_mode_set(&mut self, val: &FifoMd) -> Result<(), Error<B::Error>> {
        if val.watermark > FIFO_WTM_MAX {
            #[cfg(feature = "defmt")]
            defmt::debug!("ilps22qs: FIFO watermark {} out of range", val.watermark);
            return Err(Error::InvalidConfiguration);
        }

        let mut reg: [u8; 2] = [0; 2];
        self.read_from_register(Reg::FifoCtrl as u8, &mut reg)?;
        let mut fifo_ctrl = FifoCtrl::from_bits(reg[0]);
        let mut fifo_wtm = FifoWtm::from_bits(reg[1]);

        fifo_ctrl.set_f_mode((val.operation as u8) & 0x03);
        fifo_ctrl.set_trig_modes(((val.operation as u8) & 0x04) >> 2);
        fifo_ctrl.set_stop_on_wtm((val.watermark != 0) as u8);
        fifo_wtm.set_wtm(val.watermark);

        reg[0] = fifo_ctrl.into_bits();
        reg[1] = fifo_wtm.into_bits();
        self.write_to_register(Reg::FifoCtrl as u8, &reg)
    }

    /// Get FIFO operation mode and watermark level.
    pub fn fifo_mode_get(&mut self) -> Result<FifoMd, Error<B::Error>> {
        let mut reg: [u8; 2] = [0; 2];
        self.read_from_register(Reg::FifoCtrl as u8, &mut reg)?;
        let fifo_ctrl = FifoCtrl::from_bits(reg[0]);
        let fifo_wtm = FifoWtm::from_bits(reg[1]);

        let operation = (fifo_ctrl.trig_modes() << 2) | fifo_ctrl.f_mode();
        let operation = Operation::try_from(operation).unwrap_or_default();

        Ok(FifoMd {
            operation,
            watermark: fifo_wtm.wtm(),
        })
    }

    /// Get the current number of unread samples stored in FIFO.
    ///
    /// Reads FIFO_STATUS1 (0x25), the FIFO stored data level (0 - 128).
    pub fn fifo_level_get(&mut self) -> Result<u8, Error<B::Error>> {
        FifoStatus1::read(self).map(|reg| reg.fss())
    }

    /// FIFO level together with the full, overrun and watermark flags.
    ///
    /// Reads FIFO_STATUS1 and FIFO_STATUS2 (0x25 - 0x26) in one transaction.
    pub fn fifo_status_get(&mut self) -> Result<FifoStatus, Error<B::Error>> {
        let mut reg: [u8; 2] = [0; 2];
        self.read_from_register(Reg::FifoStatus1 as u8, &mut reg)?;
        let fifo_status1 = FifoStatus1::from_bits(reg[0]);
        let fifo_status2 = FifoStatus2::from_bits(reg[1]);

        Ok(FifoStatus {
            level: fifo_status1.fss(),
            full: fifo_status2.fifo_full_ia(),
            ovr: fifo_status2.fifo_ovr_ia(),
            wtm: fifo_status2.fifo_wtm_ia(),
        })
    }

    /// Retrieve multiple samples from FIFO buffer.
    ///
    /// Pops `samp` samples from FIFO_DATA_OUT_PRESS_XL/L/H (0x78 - 0x7A) into `data`, converting
    /// pressure with `md.fs`. Popped samples are gone from the device. `samp` above 128 or above
    /// `data.len()` is rejected before any bus access.
    pub fn fifo_data_get(
        &mut self,
        samp: u8,
        md: &Md,
        data: &mut [FifoData],
    ) -> Result<(), Error<B::Error>> {
        if samp > FIFO_SIZE || samp as usize > data.len() {
            #[cfg(feature = "defmt")]
            defmt::debug!("ilps22qs: cannot pop {} FIFO samples", samp);
            return Err(Error::InvalidConfiguration);
        }

        for item in data.iter_mut().take(samp as usize) {
            let sample = FifoDataOutPress::read(self)?;
            let raw = sample.lsb();

            *item = if md.interleaved_mode == 1 && sample.is_ah_qvar() {
                FifoData {
                    hpa: 0.0,
                    raw,
                    lsb: raw,
                }
            } else {
                FifoData {
                    hpa: from_lsb_to_hpa(raw, md.fs),
                    raw,
                    lsb: 0,
                }
            };
        }

        Ok(())
    }

    /// Configure interrupt latching.
    ///
    /// INTERRUPT_CFG.LIR applies to every event source (threshold and FIFO).
    pub fn interrupt_mode_set(&mut self, val: &IntMode) -> Result<(), Error<B::Error>> {
        let mut interrupt_cfg = InterruptCfg::read(self)?;
        interrupt_cfg.set_lir(val.int_latched & 0x01);
        interrupt_cfg.write(self)
    }

    /// Retrieve interrupt latching configuration.
    pub fn interrupt_mode_get(&mut self) -> Result<IntMode, Error<B::Error>> {
        let interrupt_cfg = InterruptCfg::read(self)?;

        Ok(IntMode {
            int_latched: interrupt_cfg.lir(),
        })
    }

    /// Configuration of interrupt on pressure threshold.
    ///
    /// Sets the over/under threshold enables in INTERRUPT_CFG and the 15-bit threshold in
    /// THS_P_L/THS_P_H. Thresholds above 0x7FFF or enables other than 0/1 are rejected before any
    /// bus access.
    pub fn int_on_threshold_mode_set(&mut self, val: &IntThMd) -> Result<(), Error<B::Error>> {
        if val.threshold > THS_P_MAX || val.over_th > 1 || val.under_th > 1 {
            #[cfg(feature = "defmt")]
            defmt::debug!("ilps22qs: invalid threshold configuration");
            return Err(Error::InvalidConfiguration);
        }

        let mut interrupt_cfg = InterruptCfg::read(self)?;
        let mut ths_p = ThsP::read(self)?;

        interrupt_cfg.set_phe(val.over_th);
        interrupt_cfg.set_ple(val.under_th);
        ths_p.set_ths(val.threshold);

        interrupt_cfg.write(self)?;
        ths_p.write(self)?;

        Ok(())
    }

    /// Retrieve configuration of interrupt on pressure threshold.
    pub fn int_on_threshold_mode_get(&mut self) -> Result<IntThMd, Error<B::Error>> {
        let interrupt_cfg = InterruptCfg::read(self)?;
        let ths_p = ThsP::read(self)?;

        Ok(IntThMd {
            threshold: ths_p.ths(),
            over_th: interrupt_cfg.phe(),
            under_th: interrupt_cfg.ple(),
        })
    }

    /// Configure reference mode for pressure offset and interrupt generation.
    ///
    /// AUTOZERO mode sets the current pressure as reference and outputs differential pressure.
    /// AUTOREFP mode uses the reference only for interrupt generation without changing output pressure.
    /// `ApplyRef::RstRefs` resets both references.
    pub fn reference_mode_set(&mut self, val: &RefMd) -> Result<(), Error<B::Error>> {
        let mut interrupt_cfg = InterruptCfg::read(self)?;

        interrupt_cfg.set_autozero(val.get_ref & 0x01);
        interrupt_cfg.set_autorefp((val.apply_ref as u8) & 0x01);
        interrupt_cfg.set_reset_az(((val.apply_ref as u8) & 0x02) >> 1);
        interrupt_cfg.set_reset_arp(((val.apply_ref as u8) & 0x02) >> 1);

        interrupt_cfg.write(self)
    }

    /// Retrieve reference mode configuration.
    pub fn reference_mode_get(&mut self) -> Result<RefMd, Error<B::Error>> {
        let interrupt_cfg = InterruptCfg::read(self)?;
        let apply_ref = (interrupt_cfg.reset_az() << 1) | interrupt_cfg.autorefp();
        let apply_ref = ApplyRef::try_from(apply_ref).unwrap_or(ApplyRef::RstRefs);

        Ok(RefMd {
            apply_ref,
            get_ref: interrupt_cfg.autozero(),
        })
    }

    /// Reference pressure captured by AUTOZERO/AUTOREFP (REF_P_L - REF_P_H).
    pub fn reference_get(&mut self) -> Result<i16, Error<B::Error>> {
        RefP::read(self).map(|reg| reg.refp())
    }

    /// Set one-point calibration (OPC) offset value.
    ///
    /// Writes a 16-bit signed offset value to the pressure offset registers (RPDS_L and RPDS_H).
    pub fn opc_set(&mut self, val: i16) -> Result<(), Error<B::Error>> {
        Rpds::new().with_offset(val).write(self)
    }

    /// Retrieve one-point calibration (OPC) offset value.
    pub fn opc_get(&mut self) -> Result<i16, Error<B::Error>> {
        Rpds::read(self).map(|reg| reg.offset())
    }
}

/// I2C device address (8-bit form 0xB9).
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum I2CAddress {
    I2cAdd = 0x5C,
}

pub const ID: u8 = 0xB4;

/// Time to restore the calibration parameters after BOOT.
pub const BOOT_TIME_MS: u32 = 10;

const FIFO_SIZE: u8 = 128;
const FIFO_WTM_MAX: u8 = 127;
const THS_P_MAX: u16 = 0x7FFF;
