mod build_matchers;

fn main() {
    let keyword_set_defs = build_matchers::parse_keyword_set_defs().expect("failed to parse keyword set defs!");
    build_matchers::write_matchers(&keyword_set_defs).expect("failed to write generated matchers");
}
