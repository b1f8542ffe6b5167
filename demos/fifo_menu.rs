use clap::Parser;
use ring_queue::RingQueue;
use std::error::Error;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Params {
    /// Number of slots in the queue, prompted for when omitted
    #[clap(short, long)]
    capacity: Option<usize>,

    /// Push generated `TestingNN` strings instead of asking for them
    #[clap(short, long)]
    scripted: bool,
}

fn print_table(queue: &RingQueue<String>) {
    println!();
    println!("  Number of Cells = {}", queue.capacity());
    println!("  Number of Used Cells = {}", queue.occupied_count());
    println!();
    queue.for_each_slot(|slot| println!("  {}", slot));
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> io::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    lines.next().transpose()
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let params = Params::parse();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let capacity = match params.capacity {
        Some(capacity) => capacity,
        None => match prompt(&mut lines, " Specify size of Table: ")? {
            Some(line) => line.trim().parse()?,
            None => return Ok(()),
        },
    };

    let mut queue = RingQueue::with_capacity(capacity)?;
    let mut counter = 0u32;

    loop {
        if params.scripted {
            print_table(&queue);
        }

        println!();
        println!("Options...");
        println!(" 0: Exit");
        println!(" 1: Push string");
        println!(" 2: Pop string");
        println!(" 3: Print entire table");

        let action = match prompt(&mut lines, "Enter Option: ")? {
            Some(line) => line,
            None => break,
        };

        match action.trim() {
            "0" | "q" | "\u{1b}" => break,
            "1" => {
                println!(" Insert elements\n");
                let item = if params.scripted {
                    counter += 1;
                    format!("Testing{:02}", counter - 1)
                } else {
                    match prompt(&mut lines, " Enter string: ")? {
                        Some(line) => line.trim().to_owned(),
                        None => break,
                    }
                };

                match queue.push(item) {
                    Ok(()) => println!(" Push successful"),
                    Err(err) => {
                        drop(err.into_inner());
                        println!(" Table is full");
                    }
                }
            }
            "2" => match queue.pop() {
                Ok(item) => println!(" Pop string : {}", item),
                Err(_) => println!(" Pop string : No string in table"),
            },
            "3" => print_table(&queue),
            _ => continue,
        }
    }

    queue.teardown();
    Ok(())
}
