//! System UI font metrics
//!
//! Supplies the em-height used as the basis for [`crate::units`] em
//! dimensions. On Windows this is the line height of the system message
//! font; everywhere else (and on any failure) the documented fallback of
//! 16 pixels applies.

/// Em-height reported when the system font cannot be queried
pub const EM_HEIGHT_FALLBACK: i32 = 16;

/// Returns the system UI font's line height in pixels
pub fn em_height() -> i32 {
    match system_em_height() {
        Some(height) if height > 0 => height,
        _ => {
            tracing::debug!("system font metrics unavailable, using fallback em-height");
            EM_HEIGHT_FALLBACK
        }
    }
}

/// Queries the message-font line height via GDI text metrics
#[cfg(windows)]
fn system_em_height() -> Option<i32> {
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Gdi::{
        CreateFontIndirectW, DeleteObject, GetDC, GetTextMetricsW, ReleaseDC, SelectObject,
        TEXTMETRICW,
    };
    use windows::Win32::UI::WindowsAndMessaging::{
        NONCLIENTMETRICSW, SPI_GETNONCLIENTMETRICS, SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS,
        SystemParametersInfoW,
    };

    unsafe {
        let mut ncm = NONCLIENTMETRICSW {
            cbSize: std::mem::size_of::<NONCLIENTMETRICSW>() as u32,
            ..Default::default()
        };
        SystemParametersInfoW(
            SPI_GETNONCLIENTMETRICS,
            ncm.cbSize,
            Some(&mut ncm as *mut _ as *mut _),
            SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
        )
        .ok()?;

        // lfMessageFont is the system UI font
        let font = CreateFontIndirectW(&ncm.lfMessageFont);
        if font.is_invalid() {
            return None;
        }

        let hdc = GetDC(HWND(0));
        if hdc.is_invalid() {
            let _ = DeleteObject(font);
            return None;
        }

        let previous = SelectObject(hdc, font);
        let mut metrics = TEXTMETRICW::default();
        let ok = GetTextMetricsW(hdc, &mut metrics).as_bool();
        let _ = SelectObject(hdc, previous);
        ReleaseDC(HWND(0), hdc);
        let _ = DeleteObject(font);

        if ok { Some(metrics.tmHeight) } else { None }
    }
}

#[cfg(not(windows))]
fn system_em_height() -> Option<i32> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn em_height_is_positive() {
        assert!(em_height() > 0);
    }
}
