use console::Style;
use lunaphase_core::config::CalibrationConfig;
use lunaphase_core::error::LunaError;
use lunaphase_core::frame::SourceFrame;
use lunaphase_core::measure::IlluminationMeasurement;
use lunaphase_core::session::CalibrationState;

pub struct Styles {
    pub title: Style,
    pub label: Style,
    pub value: Style,
    pub good: Style,
    pub bad: Style,
    pub path: Style,
}

impl Styles {
    pub fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            good: Style::new().green(),
            bad: Style::new().red().bold(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_settings(title: &str, config: &CalibrationConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to(title));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(title.chars().count())));
    println!();
    print_row(&s, "Working size", format!("{0}x{0}", config.working_size));
    print_row(&s, "Threshold", config.threshold.to_string());
    print_row(&s, "Radius", config.radius.to_string());
    print_row(
        &s,
        "Offset",
        format!("({}, {})", config.center_offset_x, config.center_offset_y),
    );
    print_row(&s, "Crop", format!("{}%", config.crop_percent));
    println!();
}

pub fn print_state(state: &CalibrationState) {
    let s = Styles::new();
    print_row(&s, "Frame", state.index.to_string());
    print_row(&s, "Threshold", state.threshold.to_string());
    print_row(&s, "Radius", state.mask.radius().to_string());
    print_row(
        &s,
        "Offset",
        format!("({}, {})", state.mask.offset_x(), state.mask.offset_y()),
    );
    print_row(&s, "Crop", format!("{}%", state.mask.crop_percent()));
}

pub fn print_measurement(frame: &SourceFrame, m: &IlluminationMeasurement) {
    let s = Styles::new();
    println!(
        "  {:>5}  {:<28} {:>8}  {:>7}  {}",
        s.label.apply_to(format!("#{}", frame.index)),
        frame.file_name(),
        s.value.apply_to(format!("{:.2}%", m.lit_percent)),
        s.good.apply_to(format!("{:.1}\u{b0}", m.phase_angle_degrees)),
        s.label.apply_to(format!("{}/{} px", m.lit_pixels, m.mask_pixels)),
    );
}

pub fn print_failures(failures: &[(usize, LunaError)]) {
    if failures.is_empty() {
        return;
    }
    let s = Styles::new();
    println!();
    println!("  {}", s.bad.apply_to(format!("{} frame(s) skipped", failures.len())));
    for (index, err) in failures {
        println!("    {} {}", s.label.apply_to(format!("#{index}")), err);
    }
}

pub fn print_saved(path: &std::path::Path) {
    let s = Styles::new();
    println!("  {:<14}{}", s.label.apply_to("Saved"), s.path.apply_to(path.display()));
}

fn print_row(s: &Styles, label: &str, value: String) {
    println!("  {:<14}{}", s.label.apply_to(label), s.value.apply_to(value));
}
