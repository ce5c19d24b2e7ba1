use std::io::{stdin, BufRead};

use flexi_logger::Logger;
use futures::stream::{self, StreamExt};
use laser_frame::{Interpreter, LineStreamExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let lines = stdin().lock().lines().map_while(Result::ok);
    let mut frames = stream::iter(lines).frames(Interpreter::new());

    futures_executor::block_on(async {
        while let Some(res) = frames.next().await {
            match res {
                Ok(frame) => println!("{}", frame),
                Err(e) => eprintln!("{}", e),
            }
        }
    });

    log::info!("final state: {:?}", frames.interpreter().state());
    Ok(())
}
