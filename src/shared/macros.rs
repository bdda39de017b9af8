/***************************************/
/*               Macros                */
/***************************************/
// Startup failures are not recoverable, log and leave
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{}", e);
                eprintln!("ERROR: {}", e);
                std::process::exit(1);
            }
        }
    };
}
