use wloutput_core::Screen;

/// Print a formatted table of arranged screens
pub fn print_screens_table(screens: &[Screen]) {
    let name_width = screens
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(6)
        .clamp(6, 20);
    let mode_width = 16; // "3840x2160@144Hz" format
    let density_width = 7;
    let scale_width = 5;
    let filter_width = 7;
    let pos_width = 15; // "x:4480 y:180" format
    let background_width = screens
        .iter()
        .filter_map(|s| s.background.as_ref())
        .map(|p| p.display().to_string().chars().count())
        .max()
        .unwrap_or(10)
        .clamp(10, 40);

    let widths = [
        name_width,
        mode_width,
        density_width,
        scale_width,
        filter_width,
        pos_width,
        background_width,
    ];

    println!("{}", border('┌', '┬', '┐', &widths));
    println!(
        "│ {:<name_width$} │ {:<mode_width$} │ {:<density_width$} │ {:<scale_width$} │ {:<filter_width$} │ {:<pos_width$} │ {:<background_width$} │",
        "Output",
        "Mode",
        "px/cm",
        "Scale",
        "Filter",
        "Position",
        "Background",
    );
    println!("{}", border('├', '┼', '┤', &widths));

    for screen in screens {
        let mode = if screen.mode.refresh > 0 {
            format!("{}@{}Hz", screen.mode, screen.mode.refresh_hz())
        } else {
            screen.mode.to_string()
        };
        let density = if screen.geometry.is_known() {
            screen.geometry.density.to_string()
        } else {
            "?".to_string()
        };
        let pos = format!("x:{} y:{}", screen.position.x, screen.position.y);
        let background = screen
            .background
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "│ {} │ {} │ {} │ {} │ {} │ {} │ {} │",
            truncate(&screen.name, name_width),
            truncate(&mode, mode_width),
            truncate(&density, density_width),
            truncate(&screen.scale.to_string(), scale_width),
            truncate(screen.scale_filter.as_str(), filter_width),
            truncate(&pos, pos_width),
            truncate(&background, background_width),
        );
    }

    println!("{}", border('└', '┴', '┘', &widths));
    println!("\nTotal: {} output(s)", screens.len());
}

fn border(left: char, middle: char, right: char, widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!(
        "{}{}{}",
        left,
        segments.join(&middle.to_string()),
        right
    )
}

/// Truncate a string to a maximum display width, padding shorter ones.
///
/// Counts characters rather than bytes so multi-byte names stay intact.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
