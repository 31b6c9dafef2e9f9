/// Everyone who boards: participants plus guides.
pub fn total_people(participants: i32, guides: i32) -> i64 {
    i64::from(participants) + i64::from(guides)
}

/// Buses needed to carry `total` people, rounding up to whole buses.
pub fn buses_required(total: i64, bus_capacity: u32) -> i64 {
    let capacity = i64::from(bus_capacity.max(1));
    (total + capacity - 1) / capacity
}
