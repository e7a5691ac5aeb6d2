//! Print the search walkthrough diagrams. Takes no input.

fn main() {
    waypath_demos::init_logging();
    print!("{}", waypath_demos::diagrams::render_all());
}
