use std::io::Write;
use log::LevelFilter;

pub fn init(verbose: bool) {
    let mut builder = env_logger::builder();
    builder.filter_level(if verbose { LevelFilter::Debug } else { LevelFilter::Info });
    builder.format(|fmt, record| {
        let style = fmt.default_level_style(record.level());
        let level = record.level().as_str().to_lowercase();
        writeln!(fmt, "{style}{level}{style:#}: {}", record.args())
    });
    builder.init();
}
