use ordkit::quickselect;

quickcheck::quickcheck! {
    fn selects_the_sorted_element(xs: Vec<i32>, n: usize) -> bool {
        let mut values = xs.clone();
        let mut sorted = xs;
        sorted.sort_unstable();

        match quickselect::select(&mut values, n) {
            Ok(index) => n < sorted.len() && values[index] == sorted[n],
            Err(ordkit::Error::OutOfRange { index, len }) => {
                index == n && len == sorted.len() && n >= len
            }
            Err(_) => false,
        }
    }
}
