use std::io::BufRead;
use std::time::Instant;

use divconq_minmax::select_with_stats;

/// Parses whitespace-separated integers; each argument may hold several of them.
pub fn parse_numbers<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<i64>, String> {
    let mut numbers = Vec::new();
    for token in tokens.iter().flat_map(|token| token.as_ref().split_whitespace()) {
        let number = token
            .parse::<i64>()
            .map_err(|_| format!("'{token}' is not an integer; enter whole numbers separated by spaces"))?;
        numbers.push(number);
    }

    if numbers.is_empty() {
        return Err("the list must not be empty".into());
    }

    Ok(numbers)
}

fn read_line_from_stdin() -> Result<String, String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|error| format!("failed to read standard input: {error}"))?;
    Ok(line)
}

pub fn main(values: &[String]) -> Result<(), String> {
    let numbers = if values.is_empty() {
        parse_numbers(&[read_line_from_stdin()?])?
    } else {
        parse_numbers(values)?
    };

    let start = Instant::now();
    let selection = select_with_stats(&numbers, 0, numbers.len() - 1).map_err(|error| error.to_string())?;
    let elapsed = start.elapsed();

    let list: Vec<String> = numbers.iter().map(i64::to_string).collect();
    println!("List: [{}]", list.join(", "));
    println!("Smallest element: {}", selection.min);
    println!("Largest element:  {}", selection.max);
    println!("Comparisons: {}", selection.comparisons);
    println!("Elapsed: {:.6} milliseconds", elapsed.as_secs_f64() * 1000.0);
    Ok(())
}
