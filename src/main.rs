use htmlmaker::json_to_html;
use std::error::Error;
use std::io::{self, Read};

fn main() -> Result<(), Box<dyn Error>> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let output = json_to_html(&input)?;
    print!("{}", output);
    Ok(())
}
