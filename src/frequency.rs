//! Phase increment to output frequency text.
//!
//! The output frequency is `41.343689 Hz * phase_increment`. It is computed in
//! micro-hertz on a `u64` so the text can be produced with integer formatting
//! only, and printed with six fractional digits (`2709458.658615`).

use heapless::String;
use ufmt::uWrite;

use crate::config::{BASE_FREQUENCY_UHZ, DISPLAY_TEXT_CAPACITY};

const MICROS_PER_UNIT: u64 = 1_000_000;

/// Text did not fit the display buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayFormatFailure;

/// Frequency text sized for any 16-bit phase increment.
pub type FrequencyText = String<DISPLAY_TEXT_CAPACITY>;

/// Output frequency in micro-hertz.
#[inline]
pub fn frequency_uhz(phase_increment: u16) -> u64 {
    u64::from(phase_increment) * BASE_FREQUENCY_UHZ
}

struct TextBuffer<'a, const N: usize>(&'a mut String<N>);

impl<const N: usize> uWrite for TextBuffer<'_, N> {
    type Error = DisplayFormatFailure;

    fn write_str(&mut self, s: &str) -> Result<(), DisplayFormatFailure> {
        self.0.push_str(s).map_err(|_| DisplayFormatFailure)
    }
}

/// Format into a buffer of `N` bytes. Fails rather than truncating.
pub fn format_frequency_in<const N: usize>(
    phase_increment: u16,
) -> Result<String<N>, DisplayFormatFailure> {
    let uhz = frequency_uhz(phase_increment);
    let hz = uhz / MICROS_PER_UNIT;
    let fraction = uhz % MICROS_PER_UNIT;

    let mut text = String::new();
    let mut out = TextBuffer(&mut text);
    ufmt::uwrite!(out, "{}.", hz)?;

    // ufmt has no width specifier, pad the fraction by hand
    let mut place = MICROS_PER_UNIT / 10;
    while place > 1 && fraction < place {
        out.write_char('0')?;
        place /= 10;
    }
    ufmt::uwrite!(out, "{}", fraction)?;

    Ok(text)
}

pub fn format_frequency(phase_increment: u16) -> Result<FrequencyText, DisplayFormatFailure> {
    format_frequency_in::<DISPLAY_TEXT_CAPACITY>(phase_increment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_zero_hertz() {
        assert_eq!(format_frequency(0).unwrap().as_str(), "0.000000");
    }

    #[test]
    fn one_unit_is_base_frequency() {
        assert_eq!(format_frequency(1).unwrap().as_str(), "41.343689");
    }

    #[test]
    fn fraction_keeps_leading_zeros() {
        // 3 * 41.343689 = 124.031067
        assert_eq!(format_frequency(3).unwrap().as_str(), "124.031067");
        assert_eq!(format_frequency(24).unwrap().as_str(), "992.248536");
    }

    #[test]
    fn full_scale_fits_default_buffer() {
        assert_eq!(format_frequency(u16::MAX).unwrap().as_str(), "2709458.658615");
    }

    #[test]
    fn small_buffer_fails_instead_of_truncating() {
        assert_eq!(format_frequency_in::<8>(u16::MAX), Err(DisplayFormatFailure));
        assert_eq!(format_frequency_in::<8>(0).unwrap().as_str(), "0.000000");
    }

    #[test]
    fn frequency_is_exact_in_micro_hertz() {
        assert_eq!(frequency_uhz(65535), 2_709_458_658_615);
    }
}
