//! ST7789 command set
//!
//! Every command is a single opcode byte sent with D/C low, optionally
//! followed by argument bytes with D/C high. Multi-byte arguments are
//! big-endian.

/// Controller opcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    Nop = 0x00,
    /// Software reset, registers return to their defaults
    SoftwareReset = 0x01,
    ReadDisplayId = 0x04,
    ReadDisplayStatus = 0x09,
    ReadPowerMode = 0x0A,
    ReadMadctl = 0x0B,
    ReadPixelFormat = 0x0C,
    ReadImageMode = 0x0D,
    ReadSignalMode = 0x0E,
    ReadSelfDiagnostic = 0x0F,
    SleepIn = 0x10,
    SleepOut = 0x11,
    PartialModeOn = 0x12,
    NormalModeOn = 0x13,
    InversionOff = 0x20,
    InversionOn = 0x21,
    GammaSet = 0x26,
    DisplayOff = 0x28,
    DisplayOn = 0x29,
    /// Column address set (x0, x1)
    ColumnAddressSet = 0x2A,
    /// Row address set (y0, y1)
    RowAddressSet = 0x2B,
    /// Write pixels into the current window
    MemoryWrite = 0x2C,
    MemoryRead = 0x2E,
    PartialArea = 0x30,
    VerticalScrollDefinition = 0x33,
    TearingEffectOff = 0x34,
    TearingEffectOn = 0x35,
    /// Memory data access control (scan order, RGB/BGR)
    MemoryAccessControl = 0x36,
    VerticalScrollStart = 0x37,
    IdleModeOff = 0x38,
    IdleModeOn = 0x39,
    /// Interface pixel format
    PixelFormat = 0x3A,
    MemoryWriteContinue = 0x3C,
    MemoryReadContinue = 0x3E,
    SetTearScanline = 0x44,
    GetScanline = 0x45,
    /// Display brightness
    WriteBrightness = 0x51,
    ReadBrightness = 0x52,
    WriteCtrlDisplay = 0x53,
    ReadCtrlDisplay = 0x54,
    /// Content adaptive brightness and colour enhancement
    WriteContentAdaptive = 0x55,
    ReadContentAdaptive = 0x56,
    WriteCabcMinBrightness = 0x5E,
    ReadCabcMinBrightness = 0x5F,
    ReadAutoBrightnessDiagnostic = 0x68,
    RamControl = 0xB0,
    RgbInterfaceControl = 0xB1,
    PorchControl = 0xB2,
    FrameRateControl1 = 0xB3,
    PartialControl = 0xB5,
    GateControl = 0xB7,
    GateOnTimingAdjust = 0xB8,
    DigitalGammaEnable = 0xBA,
    VcomSetting = 0xBB,
    LcmControl = 0xC0,
    IdSetting = 0xC1,
    VdvVrhEnable = 0xC2,
    VrhSet = 0xC3,
    VdvSet = 0xC4,
    VcomOffsetSet = 0xC5,
    /// Frame rate in normal mode
    FrameRateControl2 = 0xC6,
    CabcControl = 0xC7,
    RegisterSelect1 = 0xC8,
    RegisterSelect2 = 0xCA,
    PwmFrequencySelect = 0xCC,
    PowerControl1 = 0xD0,
    VapVanEnable = 0xD2,
    ReadId1 = 0xDA,
    ReadId2 = 0xDB,
    ReadId3 = 0xDC,
    Command2Enable = 0xDF,
    PositiveGamma = 0xE0,
    NegativeGamma = 0xE1,
    DigitalGammaLutRed = 0xE2,
    DigitalGammaLutBlue = 0xE3,
    GateControl2 = 0xE4,
    Spi2Enable = 0xE7,
    PowerControl2 = 0xE8,
    EqualizeTimeControl = 0xE9,
    ProgramModeControl = 0xEC,
    ProgramModeEnable = 0xFA,
    NvmSetting = 0xFC,
    ProgramAction = 0xFE,
}

impl Command {
    /// Opcode byte
    #[inline]
    pub const fn opcode(self) -> u8 {
        self as u8
    }
}

impl From<Command> for u8 {
    fn from(cmd: Command) -> Self {
        cmd.opcode()
    }
}

/// COLMOD argument: 18 bits/pixel on both the RGB and MCU interfaces
pub const PIXEL_FORMAT_18BIT: u8 = 0x66;

/// MADCTL argument: top-to-bottom, left-to-right, RGB order
pub const MADCTL_DEFAULT: u8 = 0x00;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addressing_opcodes() {
        assert_eq!(Command::ColumnAddressSet.opcode(), 0x2A);
        assert_eq!(Command::RowAddressSet.opcode(), 0x2B);
        assert_eq!(Command::MemoryWrite.opcode(), 0x2C);
        assert_eq!(u8::from(Command::FrameRateControl2), 0xC6);
    }

    #[test]
    fn test_power_opcodes() {
        assert_eq!(Command::SleepOut.opcode(), 0x11);
        assert_eq!(Command::DisplayOn.opcode(), 0x29);
        assert_eq!(Command::SoftwareReset.opcode(), 0x01);
    }
}
