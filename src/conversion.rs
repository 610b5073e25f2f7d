use crate::register::Fs;

pub fn from_fs1260_to_hpa(lsb: i32) -> f32 {
    (lsb as f32) / 4096.0
}

pub fn from_fs4000_to_hpa(lsb: i32) -> f32 {
    (lsb as f32) / 2048.0
}

/// Pressure in hPa for a 24-bit sample, scaled by the configured full scale.
pub fn from_lsb_to_hpa(lsb: i32, fs: Fs) -> f32 {
    match fs {
        Fs::_1260hpa => from_fs1260_to_hpa(lsb),
        Fs::_4000hpa => from_fs4000_to_hpa(lsb),
    }
}

pub fn from_lsb_to_celsius(lsb: i16) -> f32 {
    (lsb as f32) / 100.0
}

/// AH/Qvar channel: 24-bit code over a ±500 mV span.
pub fn from_lsb_to_mv(lsb: i32) -> f32 {
    (lsb as f32) * (1000.0 / 2.0) / 8_388_608.0
}

/// Nearest 24-bit sample for a pressure in hPa, saturated to the code range.
pub fn from_hpa_to_lsb(hpa: f32, fs: Fs) -> i32 {
    let scaled = match fs {
        Fs::_1260hpa => hpa * 4096.0,
        Fs::_4000hpa => hpa * 2048.0,
    };
    libm::roundf(scaled).clamp(-8_388_608.0, 8_388_607.0) as i32
}

/// THS_P value for a threshold in hPa (×16 at 1260 hPa, ×8 at 4000 hPa).
pub fn from_hpa_to_threshold(hpa: f32, fs: Fs) -> u16 {
    let scaled = match fs {
        Fs::_1260hpa => hpa * 16.0,
        Fs::_4000hpa => hpa * 8.0,
    };
    libm::roundf(scaled).clamp(0.0, 32767.0) as u16
}
