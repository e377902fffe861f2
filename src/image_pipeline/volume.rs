//! Trading volume model
//!
//! The chart is assumed to span a fixed number of trading days, each bar a
//! half-hour interval, and a full-height bar to represent a fixed volume.
//! Every pixel of the image is then worth the same slice of volume.

/// Fixed linear scaling from pixel counts to traded volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeModel {
    /// Length of one trading session in hours
    pub hours_per_trading_day: f64,
    /// Number of sessions covered by the chart
    pub trading_days: f64,
    /// Volume of a half-hour bar drawn at full image height
    pub volume_per_half_hour: f64,
}

impl Default for VolumeModel {
    fn default() -> Self {
        Self {
            hours_per_trading_day: 6.5,
            trading_days: 14.0,
            volume_per_half_hour: 10_000_000.0,
        }
    }
}

impl VolumeModel {
    pub fn half_hours_per_day(&self) -> f64 {
        self.hours_per_trading_day * 2.0
    }

    pub fn volume_for_full_image(&self) -> f64 {
        self.volume_per_half_hour * self.half_hours_per_day() * self.trading_days
    }

    /// Volume represented by one pixel of a `width` x `height` image.
    ///
    /// An empty image yields infinity, which saturates once truncated.
    pub fn volume_per_pixel(&self, width: u32, height: u32) -> f64 {
        self.volume_for_full_image() / (width as f64 * height as f64)
    }

    pub fn estimate(&self, width: u32, height: u32, red_pixels: usize, blue_pixels: usize) -> VolumeEstimate {
        let volume_per_pixel = self.volume_per_pixel(width, height);
        let whole_volume_per_pixel = volume_per_pixel as u64;

        VolumeEstimate {
            volume_per_pixel,
            total_volume_red: (red_pixels as u64).saturating_mul(whole_volume_per_pixel),
            total_volume_blue: ((red_pixels + blue_pixels) as u64).saturating_mul(whole_volume_per_pixel),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeEstimate {
    pub volume_per_pixel: f64,
    pub total_volume_red: u64,
    /// Red plus blue bars
    pub total_volume_blue: u64,
}

impl VolumeEstimate {
    pub fn red_millions(&self) -> u64 {
        self.total_volume_red / 1_000_000
    }

    pub fn blue_millions(&self) -> u64 {
        self.total_volume_blue / 1_000_000
    }
}
