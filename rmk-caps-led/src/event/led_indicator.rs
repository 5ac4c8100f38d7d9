use bitfield_struct::bitfield;

/// Indicators defined in the HID spec 11.1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedIndicatorType {
    NumLock,
    CapsLock,
    ScrollLock,
    Compose,
    Kana,
}

/// Errors of decoding a HID LED output report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportError {
    /// The report carries no data
    Empty,
    /// The report is longer than `report id + indicator byte`
    TooLong(usize),
}

/// Indicator bitmask sent by the host in the LED output report.
///
/// Bit 1 is Caps Lock.
#[bitfield(u8, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct LedIndicator {
    #[bits(1)]
    pub num_lock: bool,
    #[bits(1)]
    pub caps_lock: bool,
    #[bits(1)]
    pub scroll_lock: bool,
    #[bits(1)]
    pub compose: bool,
    #[bits(1)]
    pub kana: bool,
    #[bits(3)]
    _reserved: u8,
}

impl LedIndicator {
    pub const NUM_LOCK: Self = Self::new().with_num_lock(true);
    pub const CAPS_LOCK: Self = Self::new().with_caps_lock(true);
    pub const SCROLL_LOCK: Self = Self::new().with_scroll_lock(true);
    pub const COMPOSE: Self = Self::new().with_compose(true);
    pub const KANA: Self = Self::new().with_kana(true);

    /// Decode the LED output report from the host.
    ///
    /// The boot protocol report is a single indicator byte. A two byte report is
    /// `[report_id, indicators]`.
    pub fn from_report(report: &[u8]) -> Result<Self, ReportError> {
        match report {
            [] => Err(ReportError::Empty),
            [indicators] | [_, indicators] => Ok(Self::from_bits(*indicators)),
            _ => Err(ReportError::TooLong(report.len())),
        }
    }

    /// Whether the given indicator is active
    pub fn is_active(&self, indicator: LedIndicatorType) -> bool {
        match indicator {
            LedIndicatorType::NumLock => self.num_lock(),
            LedIndicatorType::CapsLock => self.caps_lock(),
            LedIndicatorType::ScrollLock => self.scroll_lock(),
            LedIndicatorType::Compose => self.compose(),
            LedIndicatorType::Kana => self.kana(),
        }
    }
}
