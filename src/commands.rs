use crate::models::BookingForm;

pub const HELP: &str = "\
commands:
  services                         list bookable services
  add <service-id>                 add one unit to the cart
  remove <service-id>              remove one unit from the cart
  cart                             show the cart
  book <name> | <email> | <phone>  send a booking request
  subscribe <name> | <email>       join the newsletter
  status                           show the booking status line
  help                             show this text
  quit                             leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Services,
    Add(String),
    Remove(String),
    Cart,
    Book(BookingForm),
    Subscribe { name: String, email: String },
    Status,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "services" | "list" => Ok(Command::Services),
            "add" => required_id(rest).map(Command::Add),
            "remove" => required_id(rest).map(Command::Remove),
            "cart" => Ok(Command::Cart),
            "book" => {
                let mut fields = split_fields(rest, 3).into_iter();
                Ok(Command::Book(BookingForm {
                    name: fields.next().unwrap_or_default(),
                    email: fields.next().unwrap_or_default(),
                    phone: fields.next().unwrap_or_default(),
                }))
            }
            "subscribe" => {
                let mut fields = split_fields(rest, 2).into_iter();
                Ok(Command::Subscribe {
                    name: fields.next().unwrap_or_default(),
                    email: fields.next().unwrap_or_default(),
                })
            }
            "status" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "" => Err("empty command".to_string()),
            other => Err(format!("unknown command: {other} (try `help`)")),
        }
    }
}

/// Turn one raw input line into text. Invalid UTF-8 is replaced rather than
/// rejected so a stray byte never ends the session.
pub fn decode_line(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .trim_end_matches(['\r', '\n'])
        .to_string()
}

fn required_id(rest: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err("missing service id".to_string())
    } else {
        Ok(rest.to_string())
    }
}

/// `a | b | c` into at most `n` raw fields. Missing ones come back empty so
/// the booking validation gets to report them.
fn split_fields(rest: &str, n: usize) -> Vec<String> {
    let mut fields: Vec<String> = rest.splitn(n, '|').map(str::to_string).collect();
    if rest.is_empty() {
        fields.clear();
    }
    fields.resize(n, String::new());
    fields
}
