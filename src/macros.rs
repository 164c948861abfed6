macro_rules! verbose_println {
    ($($p:expr),+) => {
        if crate::config::ARGS.verbose {
            println!($($p),+);
        }
    }
}
macro_rules! info {
    ($($p:expr),+) => {
        println!(concat!(blue!("INFO"),": {}"),format_args!($($p),+))
    }
}

macro_rules! warn {
    ($($p:expr),+) => {
        println!(concat!(red!("WARNING"),": {}"),format_args!($($p),+))
    }
}
macro_rules! lookup_err {
    ($($msg:expr),+) => {
        crate::Error::new(
            crate::ErrorKind::Lookup,
            None,
            format!("{} {}", red!("Lookup Error"), format!($($msg),+)).as_str(),
        )
    };
}
macro_rules! malformed_err {
    ($pos:expr, $($msg:expr),+) => {
        crate::Error::new(
            crate::ErrorKind::Malformed,
            Some($pos),
            format!("{} {}", red!("Malformed Row"), format!($($msg),+)).as_str(),
        )
    };
}
macro_rules! layout_err {
    ($($msg:expr),+) => {
        crate::Error::new(
            crate::ErrorKind::Layout,
            None,
            format!("{} {}", red!("Layout Error"), format!($($msg),+)).as_str(),
        )
    };
}
macro_rules! color {
    ($color: literal, $msg: expr) => {
        concat!("\x1b[", $color, "m", $msg, "\x1b[0m")
    };
}
macro_rules! red {
    ($msg:expr) => {
        color!(91, $msg)
    };
}
macro_rules! blue {
    ($msg:expr) => {
        color!(94, $msg)
    };
}
