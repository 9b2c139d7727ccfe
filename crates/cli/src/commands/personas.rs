//! `breatheeasy personas`: list persona keys.

use breatheeasy_personas::PersonaRegistry;

pub fn run() {
    let personas = PersonaRegistry::builtin();
    println!();
    for summary in personas.list() {
        println!("  {:<20} {}", summary.key, summary.name);
        println!("  {:<20} {}", "", summary.description);
    }
    println!();
}
