/// Leftmost insertion point of `value` in the ascending `values`.
///
/// Every element before the returned index is strictly less than `value`,
/// every element at or after it is greater or equal. Values that do not
/// compare with themselves (`NaN`) are ordered after everything else, so a
/// `NaN` query lands behind all comparable elements instead of panicking.
pub fn sorted_index<T: PartialOrd>(values: &[T], value: &T) -> usize {
    binary_index(values, value, false)
}

/// Rightmost insertion point of `value`: every element before the returned
/// index is less than or equal to `value`.
pub fn sorted_last_index<T: PartialOrd>(values: &[T], value: &T) -> usize {
    binary_index(values, value, true)
}

fn binary_index<T: PartialOrd>(values: &[T], value: &T, highest: bool) -> usize {
    let value_is_nan = value.partial_cmp(value).is_none();

    values.partition_point(|computed| {
        if value_is_nan {
            let reflexive = computed.partial_cmp(computed).is_some();
            reflexive || highest
        } else if highest {
            computed <= value
        } else {
            computed < value
        }
    })
}
