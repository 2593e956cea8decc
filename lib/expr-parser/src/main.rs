use log::LevelFilter;
use simplelog::*;

use expr_parser::parse;

fn main() {
    TermLogger::init(LevelFilter::Debug, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).unwrap();

    // let s = "(x1 | ~(x2 | ~~~x4) & x3)";
    // let s = "x1 -> ~x2 | x3 -> x3 & x4";
    let s = "x1 \\/ x2 /\\ x3 <-> ~x4";
    println!("Input: {:?}", s);
    let postfix = parse(s);
    println!("Parsed: {:?}", postfix);
    if let Ok(postfix) = postfix {
        println!("Postfix: {}", postfix);
        if let Ok(expr) = postfix.to_expr() {
            println!("Tree: {:#}", expr);
            println!("Tree: {}", expr);
        }
    }
}
