#![forbid(unsafe_code)]

fn main() -> Result<(), pixels::Error> {
    conway_life::run()
}
