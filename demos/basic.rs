//! Walk-through: load a small program and run its queries.
//!
//! Run with `cargo run --example basic`.

use hornlog::Parser;

const PROGRAM: &str = r#"
% a small family tree
parent(alice, bob).
parent(alice, carol).
parent(bob, dave).
parent(carol, erin).

grandparent(X, Z) :- parent(X, Y), parent(Y, Z).
sibling(X, Y) :- parent(P, X), parent(P, Y).

?- grandparent(alice, Who).
?- sibling(bob, Who).
?- parent(dave, Who).
"#;

fn main() {
    let program = Parser::new().parse_str(PROGRAM).expect("failed to parse program");
    println!(
        "Parsed {} facts, {} rules, {} queries",
        program.facts.len(),
        program.rules.len(),
        program.queries.len()
    );

    let (kb, queries) = program.into_knowledge_base();
    for goal in queries {
        println!("\n?- {}.", goal);
        let mut any = false;
        for solution in kb.query(goal.predicate.clone(), goal.args.clone()) {
            any = true;
            println!("{}", solution);
        }
        if !any {
            println!("false.");
        }
    }
}
