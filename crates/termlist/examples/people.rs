use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;
use std::fs::File;
use std::io;
use std::io::Write;
use termlist::Key;
use termlist::List;
use termlist::Record;

struct Person {
    name: String,
    last_name: String,
    birthday: String,
}

impl Record for Person {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "Name" => Some(self.name.clone()),
            "LastName" => Some(self.last_name.clone()),
            "Birthday" => Some(self.birthday.clone()),
            _ => None,
        }
    }
}

fn prompt(list: &mut List<Person>, label: &str) -> io::Result<String> {
    println!("Enter {label}:");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    if let Err(err) = list.erase_lines(2) {
        log::warn!("failed to erase prompt: {err}");
    }
    Ok(line.trim().to_string())
}

fn read_person(list: &mut List<Person>) -> io::Result<Person> {
    Ok(Person {
        name: prompt(list, "a name")?,
        last_name: prompt(list, "a last name")?,
        birthday: prompt(list, "a birthday")?,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("people.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut list: List<Person> = List::for_records();
    list.show_header(true);
    list.set_field_width(30);
    list.show_field("Name");
    list.show_field("LastName");
    list.show_field("Birthday");

    list.bind_described(Key(b'a'), "add", |l| match read_person(l) {
        Ok(p) => l.add_item(p),
        Err(err) => log::error!("could not read person: {err}"),
    });
    list.bind_described(Key(b'd'), "delete", |l| {
        let cursor = l.cursor();
        l.remove_item(cursor);
    });
    list.bind_described(Key(b'q'), "quit", |l| l.exit());
    list.on_exit(|l| log::info!("leaving with {} people", l.len()));
    log::debug!("keys: {}", list.help_line());

    list.display_terminal()?;
    Ok(())
}
