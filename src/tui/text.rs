use crate::profile::{Profile, Relative};
use crate::settings::Settings;
use crate::terminal::{
    RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top, clear, flush,
    format_number, print_error, print_rule,
};
use crate::tui::WordsInput;

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate)"
}

pub fn print_help() {
    box_top("Persona");
    box_line_center("Targeted password-candidate wordlist generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: run without arguments. A menu collects the");
    box_line("     profile, relatives and settings, then writes the list.");
    box_line("  2) Client: pass profile flags directly (e.g. --name carlos");
    box_line("     --year 1990) and candidates stream to stdout or a file.");
    box_line("  3) Command: -c saves the flags; a bare `persona` then reruns");
    box_line("     them. Clear with `persona -c`, show with `persona -c get`.");
    box_line("  4) Words: --words or --from-wordlist expand base words through");
    box_line("     the transform library, no profile needed.");
    box_line("");
    box_line("USAGE:");
    box_line("  persona [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Profile:");
    box_opt("      --name <NAME>", "Given name");
    box_opt("      --surname <NAME>", "Surname");
    box_opt("      --doc <NUMBER>", "Identity document number, any punctuation");
    box_opt("      --birth <DDMMYYYY>", "Birth date; fills day, month and year");
    box_opt("      --year <YYYY>", "Birth year when the full date is unknown");
    box_opt("      --team <NAME>", "Favourite club or affiliation");
    box_opt("      --city <NAME>", "City");
    box_opt("      --age <N>", "Age");
    box_opt("      --pet <NAME>", "Pet name");
    box_opt("      --partner <NAME>", "Partner name");
    box_opt("      --old <PASS>", "Known former password, up to three times");
    box_opt(
        "      --relative <SPEC>",
        "NAME[:KIND[:YEAR]], repeatable. KIND: hijo/hija, mascota, pareja, padre, madre, hermano, amigo or the English words",
    );
    box_opt("      --profile <FILE>", "Read `key = value` lines; flags override them");
    box_line("");
    box_line(" Words:");
    box_opt("      --words <LIST>", "Comma-separated base words");
    box_opt(
        "      --word-forms <SET>",
        "Forms for --words: u upper, c capitalized, l leet, r reversed, s common suffixes (default: uclrs)",
    );
    box_opt("      --suffix <TEXT>", "Extra suffix for --words");
    box_opt("  --from-wordlist <FILE>", "Expand every line of FILE into its full variant set");
    box_line("");
    box_line(" Generation:");
    box_opt("      --min-len <N>", "Shortest candidate (default: 4)");
    box_opt("      --max-len <N>", "Longest candidate (default: 28)");
    box_opt("  -n, --max <N>", "Stop after N candidates (default: no limit)");
    box_opt(
        "      --doc-sweep [STEP]",
        "Without --doc, walk the document range estimated from the birth year (default step: 1,000)",
    );
    box_opt("      --pair-cap <N>", "Relatives combined pairwise (default: 10)");
    box_opt("      --no-locale", "Skip Rioplatense phrases, clubs and idioms");
    box_opt("      --full-nicks", "Run nicknames through every affix table");
    box_line("");
    box_line(" Output:");
    box_opt("  -o, --output [FILE]", "Write to file (default: persona.txt)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Only candidates on stdout, no messages");
    box_line("");
    box_line(" Settings:");
    box_opt("  -c, --command [FLAGS]", "Save flags as defaults. Run alone to clear.");
    box_opt("  -d, --default", "Use default settings");
    box_opt("  -s, --saved", "Use saved settings from config file");
    box_opt("      --save", "Save this run's generation settings");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_opt("      --verbose [1-4]", "Log level: warn, info, debug, trace");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  persona --name carlos --year 1990");
    box_line("  persona --name ana --birth 15031990 --relative boby:perro -o");
    box_line("  persona --profile target.txt -n 100000 -o lists/");
    box_line("  persona --name juan --year 1985 --doc-sweep 10000 -q > list.txt");
    box_line("  persona --words carlos,boca --word-forms cls --suffix 2024");
    box_line("  persona --from-wordlist base.txt -o expanded.txt");
    box_line("");
    box_bottom();
    println!();
}

pub fn print_file_exists(file_name: &str) {
    print_error(&format!("File {file_name} already exists."));
    println!();
    box_top("");
    box_line_center("a) append | o) overwrite");
    box_bottom();
    println!();
    flush();
}

pub fn print_main_menu(profile: &Profile, relatives: &[Relative], print_invalid: &mut bool) {
    let fields = profile_rows(profile)
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .count();

    box_top("Main Menu");
    box_line("");
    box_line(&format!("  1) profile ({fields} field(s) set)"));
    box_line(&format!("  2) relatives ({})", relatives.len()));
    box_line("  3) settings");
    box_line("  4) clear");
    box_line("  5) words");
    box_line("  6) help");
    box_line("  7) quit");
    box_line("");
    box_bottom();

    if *print_invalid {
        print_error("Invalid option.");
        *print_invalid = false;
    } else {
        println!();
    }
    flush();
}

/// Menu rows for the editable profile fields, in menu order.
pub fn profile_rows(profile: &Profile) -> [(&'static str, &str); 14] {
    [
        ("Name", &profile.name),
        ("Surname", &profile.surname),
        ("Document", &profile.document),
        ("Birth date (DDMMYYYY)", &profile.birth_date),
        ("Birth year", &profile.year),
        ("Team", &profile.affiliation),
        ("City", &profile.city),
        ("Age", &profile.age),
        ("Pet", &profile.pet),
        ("Partner", &profile.partner),
        ("Former password 1", &profile.old_passwords[0]),
        ("Former password 2", &profile.old_passwords[1]),
        ("Former password 3", &profile.old_passwords[2]),
        ("Profile file", ""),
    ]
}

pub fn print_profile_menu(profile: &Profile, error: Option<&str>) {
    clear();
    box_top("Profile");
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");
    for (i, (label, value)) in profile_rows(profile).iter().enumerate() {
        if i == 13 {
            box_line("");
            box_line(&format!("  {}) Load from `key = value` file", i + 1));
        } else {
            box_line(&format!("  {}) {label}: {value}", i + 1));
        }
    }
    box_line("");
    print_rule();
    box_line("     c) clear profile  |  Enter) back");
    box_bottom();
    print_status(error);
}

pub fn print_relatives_menu(relatives: &[Relative], error: Option<&str>) {
    clear();
    box_top("Relatives");
    box_line_center("NAME[:KIND[:YEAR]]  e.g.  ana:hija:2015  boby:perro");
    box_line("");
    if relatives.is_empty() {
        box_line("  (none)");
    }
    for (i, rel) in relatives.iter().enumerate() {
        let year = if rel.year.is_empty() { "-" } else { &rel.year };
        box_line(&format!("  {}) {} ({:?}, {year})", i + 1, rel.name, rel.kind));
    }
    box_line("");
    print_rule();
    box_line("     a) add  |  <n>) remove  |  c) clear all  |  Enter) back");
    box_bottom();
    print_status(error);
}

pub fn print_words_menu(input: &WordsInput, error: Option<&str>) {
    clear();
    box_top("Words");
    box_line_center("Expand base words or a wordlist, no profile needed");
    box_line("");
    box_line(&format!("  1) Base words: {}", input.words));
    box_line(&format!("  2) Forms: {}", input.forms.letters()));
    box_line("      - u upper, c capitalized, l leet, r reversed, s suffixes");
    box_line(&format!("  3) Extra suffix: {}", input.forms.suffix));
    box_line(&format!("  4) Wordlist file: {}", input.wordlist));
    box_line("      - Every line gets the full variant set");
    box_line("");
    print_rule();
    box_line("     g) generate  |  c) clear  |  Enter) back");
    box_bottom();
    print_status(error);
}

pub fn print_settings_menu(settings: &Settings, error: Option<&str>) {
    clear();
    box_top("Settings Menu");
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");

    let ceiling = match settings.max_candidates {
        0 => "none".to_string(),
        n => format_number(n),
    };
    let sweep = match settings.doc_sweep_step {
        0 => "off".to_string(),
        n => format!("every {}", format_number(n as usize)),
    };

    box_line(&format!("{UNDERLINE}Generation{RESET}:"));
    box_line(&format!("  1) Minimum length: {}", settings.min_len));
    box_line(&format!("  2) Maximum length: {}", settings.max_len));
    box_line(&format!("  3) Candidate ceiling: {ceiling}"));
    box_line(&format!("  4) Document sweep: {sweep}"));
    box_line("      - Only when no document number is given");
    box_line(&format!("  5) Relatives combined pairwise: {}", settings.pair_cap));
    box_line(&format!("  6) Rioplatense idioms: {}", settings.locale));
    box_line(&format!("  7) Full nickname variants: {}", settings.full_nicknames));

    box_line("");
    box_line(&format!("{UNDERLINE}Output{RESET}:"));
    box_line(&format!("  8) Candidates to terminal: {}", settings.output_to_terminal));
    box_line(&format!("  9) Output file path: {}", settings.output_file_path));

    box_line("");
    box_line(&format!("{UNDERLINE}Command on start{RESET}:"));
    box_line(&format!("  10) Command to run with 'persona': {}", settings.cli_command));
    box_line("      - Ex: --profile target.txt -o (see help)");

    box_line("");
    print_rule();
    box_line("     r) load defaults  |  f) load saved  |  s) save  |  e) exit");
    box_line("     d) delete output file");
    box_bottom();
    print_status(error);
}

fn print_status(error: Option<&str>) {
    match error {
        Some(msg) => print_error(msg),
        None => println!(),
    }
    flush();
}
