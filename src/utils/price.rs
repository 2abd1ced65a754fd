/// Rupee amount with Indian digit grouping: 150000 -> "₹1,50,000".
pub fn format_rupees(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();

    format!("₹{},{}", groups.join(","), last_three)
}

pub fn per_hour(amount: u32) -> String {
    format!("{}/hr", format_rupees(amount))
}
