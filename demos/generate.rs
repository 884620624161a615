use isd_birthday::dataset::{format_case, END_MARKER};
use isd_birthday::isd::params::SdExperimentParams;

fn main() {
    let instance = SdExperimentParams::new(16, b"demo".to_vec()).generate().unwrap();
    print!("{}", format_case("demo", &instance));
    println!("{END_MARKER}");
}
