use rationally::{Problem, Rational};
use std::io;

pub fn main() {
    loop {
        let mut input = String::new();

        io::stdin()
            .read_line(&mut input)
            .expect("Failed to read calculator input");

        let line = input.trim();
        if line.is_empty() {
            break;
        }

        let mut words = line.split_whitespace();
        let (Some(left), Some(op), Some(right), None) =
            (words.next(), words.next(), words.next(), words.next())
        else {
            eprintln!("Expecting a line like: 1/2 + 1/3");
            continue;
        };

        let left: Rational = match left.parse() {
            Ok(parsed) => parsed,
            Err(problem) => {
                eprintln!("Parsing your input failed: {problem}");
                continue;
            }
        };
        let right: Rational = match right.parse() {
            Ok(parsed) => parsed,
            Err(problem) => {
                eprintln!("Parsing your input failed: {problem}");
                continue;
            }
        };

        let ans = match op {
            "+" => Ok(left + right),
            "-" => Ok(left - right),
            "*" => Ok(left * right),
            "/" => left.divide(right),
            other => {
                eprintln!("Unknown operator: {other}");
                continue;
            }
        };

        match ans {
            Ok(ans) => println!("{ans}"),
            Err(Problem::DivideByZero) => println!("Attempted division by zero"),
            Err(problem) => println!("Calculation failed: {problem}"),
        }
    }
}
