use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;
use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;
use termlist::DisplayOptions;
use termlist::SelectableList;

struct Package {
    name: &'static str,
    version: &'static str,
}

fn package_field(pkg: &Package, field: &str) -> String {
    match field {
        "Package" => pkg.name.to_string(),
        _ => pkg.version.to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("picker.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let options = DisplayOptions::new()
        .fields(["Package", "Version"])
        .field_width(16)
        .show_header(true);
    let mut list = SelectableList::with_options(package_field, options);
    for (name, version) in [
        ("ratatui", "0.29"),
        ("crossterm", "0.28"),
        ("thiserror", "2"),
        ("log", "0.4"),
    ] {
        list.add_item(Package { name, version });
    }

    let picked = Rc::new(RefCell::new(Vec::new()));
    let sink = picked.clone();
    list.on_exit(move |l| {
        sink.borrow_mut()
            .extend(l.selected_items().into_iter().map(|p| p.name));
    });
    list.bind_return(|l| l.exit());

    list.display_terminal()?;
    println!("picked: {}", picked.borrow().join(", "));
    Ok(())
}
