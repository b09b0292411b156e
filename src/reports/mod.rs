use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use digitcost::digits::{ASCII_DIGITS, THAI_DIGITS};
use digitcost::layouts::{LayoutInfo, LayoutSet};
use digitcost::matrix::AnalysisResult;
use digitcost::artifact::AnalysisReport;
use digitcost::scorer::{KeystrokeModel, ScoringMode};
use digitcost::typist::TypistProfile;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, from: usize, to: usize) {
    for i in from..=to {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_report(report: &AnalysisReport) {
    println!(
        "\n📄 {} (generated {}, v{})",
        report.metadata.document_name, report.metadata.generated_at, report.metadata.tool_version
    );
    print_document_stats(&report.analysis);
    for typist in &report.analysis.typists {
        print_scenario_table(&report.analysis, typist);
    }
    print_key_findings(report);
    print_projections(report);
}

pub fn print_document_stats(result: &AnalysisResult) {
    let doc = &result.document;
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Characters"), Cell::new(doc.total_characters)]);
    table.add_row(vec![Cell::new("Lines"), Cell::new(doc.total_lines)]);
    table.add_row(vec![Cell::new("Thai digits"), Cell::new(doc.thai_digits)]);
    table.add_row(vec![
        Cell::new("International digits"),
        Cell::new(doc.international_digits),
    ]);
    table.add_row(vec![
        Cell::new("Digit share"),
        Cell::new(format!("{:.2}%", doc.digit_percentage)),
    ]);
    table.add_row(vec![
        Cell::new("Number sequences"),
        Cell::new(doc.sequences.total_sequences),
    ]);
    align_right(&mut table, 1, 1);

    println!("\n📊 === DOCUMENT === 📊");
    println!("{}", table);
}

pub fn print_scenario_table(result: &AnalysisResult, typist: &TypistProfile) {
    let cmp = result.comparison(&typist.name);

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Scenario").add_attribute(Attribute::Bold),
        Cell::new("Minutes").fg(Color::Cyan),
        Cell::new("Hours"),
        Cell::new("Digit s"),
        Cell::new("Shifted"),
        Cell::new("Saved"),
        Cell::new(""),
    ]);

    for s in result.scenarios_for(&typist.name) {
        let is_optimal = cmp.is_some_and(|c| c.optimal == s.scenario);
        let marker = match (s.scenario.is_current(), is_optimal) {
            (true, true) => "CURRENT / OPTIMAL",
            (true, false) => "CURRENT",
            (false, true) => "OPTIMAL",
            (false, false) => "",
        };
        let saved = cmp
            .and_then(|c| c.savings.iter().find(|v| v.scenario == s.scenario))
            .map_or_else(|| "-".to_string(), |v| format!("{:.1}%", v.saved_percent));

        let mut name = Cell::new(s.scenario.to_string());
        if is_optimal {
            name = name.fg(Color::Green).add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            name,
            Cell::new(format!("{:.1}", s.total_minutes())),
            Cell::new(format!("{:.2}", s.total_hours())),
            Cell::new(format!("{:.1}", s.digit_seconds)),
            Cell::new(s.shifted_keystrokes),
            Cell::new(saved),
            Cell::new(marker),
        ]);
    }
    align_right(&mut table, 1, 5);

    println!(
        "\n⌨️  {} ({}s / keystroke)",
        typist.label, typist.keystroke_seconds
    );
    println!("{}", table);

    if let Some(b) = cmp.and_then(|c| c.baseline) {
        println!(
            "   Lost time: {:.1} min per document ({:.1}%)",
            b.lost_seconds / 60.0,
            b.delta_percent
        );
    }
}

pub fn print_key_findings(report: &AnalysisReport) {
    let kf = &report.key_findings;
    println!("\n🏆 === KEY FINDINGS ({}) === 🏆", kf.typist);
    if let Some(current) = &kf.current_state {
        println!(
            "   Current : {:<45} {:>8.1} min",
            current.description, current.time_minutes
        );
    }
    println!(
        "   Optimal : {:<45} {:>8.1} min",
        kf.optimal_state.description, kf.optimal_state.time_minutes
    );
    println!(
        "   Saved   : {:.1} min per document ({:.1}%)",
        kf.time_saved_minutes, kf.efficiency_gain_percent
    );
}

pub fn print_projections(report: &AnalysisReport) {
    let ip = &report.impact_projections;
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Scale").add_attribute(Attribute::Bold),
        Cell::new("Docs/day"),
        Cell::new("Hours/year").fg(Color::Cyan),
        Cell::new("Savings/year").fg(Color::Green),
    ]);
    for p in &ip.scales {
        table.add_row(vec![
            Cell::new(&p.scale),
            Cell::new(p.docs_per_day),
            Cell::new(format!("{:.0}", p.annual_hours_saved)),
            Cell::new(format!("${:.0}", p.annual_cost_savings)),
        ]);
    }
    align_right(&mut table, 1, 3);

    println!(
        "\n📈 === IMPACT ({} days/year, ${:.2}/hour) === 📈",
        ip.assumptions.working_days, ip.assumptions.hourly_cost
    );
    println!("{}", table);
}

pub fn print_layout_summary(infos: &[LayoutInfo]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Layout").add_attribute(Attribute::Bold),
        Cell::new("Mapped keys"),
        Cell::new("Shifted"),
        Cell::new("Unshifted"),
    ]);
    for info in infos {
        table.add_row(vec![
            Cell::new(info.layout),
            Cell::new(info.total_mapped_keys),
            Cell::new(info.shifted_keys),
            Cell::new(info.unshifted_keys),
        ]);
    }
    align_right(&mut table, 1, 3);

    println!("\n🗺️  === LAYOUTS === 🗺️");
    println!("{}", table);
}

/// Seconds per digit for each layout and script at a given keystroke time.
pub fn print_digit_comparison(layouts: &LayoutSet, keystroke_seconds: f64) {
    let model = ScoringMode::Unweighted.model();
    let cost = |name, c: char| {
        layouts
            .get(name)
            .lookup(c)
            .map_or_else(|| "n/a".to_string(), |k| {
                format!("{:.2}s", model.keystroke_units(k) * keystroke_seconds)
            })
    };

    let mut table = new_table();
    let mut header = vec![Cell::new("Digit").add_attribute(Attribute::Bold)];
    for layout in layouts.iter() {
        header.push(Cell::new(format!("{} Thai", layout.name().label())));
        header.push(Cell::new(format!("{} Intl", layout.name().label())));
    }
    table.set_header(header);

    for (thai, ascii) in THAI_DIGITS.iter().zip(ASCII_DIGITS.iter()) {
        let mut row = vec![Cell::new(format!("{} / {}", thai, ascii))];
        for layout in layouts.iter() {
            row.push(Cell::new(cost(layout.name(), *thai)));
            row.push(Cell::new(cost(layout.name(), *ascii)));
        }
        table.add_row(row);
    }
    align_right(&mut table, 1, 4);

    println!("\n🔢 === DIGIT COST ({}s / keystroke) === 🔢", keystroke_seconds);
    println!("{}", table);
}

pub fn print_typists(profiles: &[TypistProfile]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Label"),
        Cell::new("s/keystroke").fg(Color::Cyan),
        Cell::new("Description"),
    ]);
    for p in profiles {
        table.add_row(vec![
            Cell::new(&p.name),
            Cell::new(&p.label),
            Cell::new(p.keystroke_seconds),
            Cell::new(&p.description),
        ]);
    }
    align_right(&mut table, 2, 2);

    println!("\n👥 === TYPIST PROFILES === 👥");
    println!("{}", table);
}
