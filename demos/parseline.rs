use rustyline::DefaultEditor;

use puny::*;

fn main() {
    let mut rl = DefaultEditor::new().expect("Failed to init editor");
    while let Ok(ref line) = rl.readline(">> ") {
        println!("punycode::decode({line}) == {:?}", punycode::decode(line));
        println!("decode_label({line}) == {:?}", decode_label(line));
        println!("decode_hostname({line}) == {:?}", decode_hostname(line));
        println!("decode_email({line}) == {:?}", decode_email(line));
        println!(
            "idna::punycode::decode_to_string({line}) == {:?}",
            idna::punycode::decode_to_string(line)
        );
        rl.add_history_entry(line).expect("Failed to save history");
    }
}
