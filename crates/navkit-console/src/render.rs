use navkit_protocol::MenuItem;

/// Render the menu as an indented tree, one line per item.
pub fn menu_tree_lines(items: &[MenuItem]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, item) in items.iter().enumerate() {
        push_item(item, "", i == items.len() - 1, true, &mut lines);
    }
    lines
}

fn push_item(item: &MenuItem, prefix: &str, is_last: bool, is_root: bool, lines: &mut Vec<String>) {
    let branch = if is_root {
        String::new()
    } else if is_last {
        format!("{prefix}└── ")
    } else {
        format!("{prefix}├── ")
    };

    let mut flags = String::new();
    if item.disabled {
        flags.push_str(" [disabled]");
    }
    if item.new_feature {
        flags.push_str(" [new]");
    }
    lines.push(format!("{branch}{} ({}){flags}", item.label, item.key));

    let child_prefix = if is_root {
        String::new()
    } else if is_last {
        format!("{prefix}    ")
    } else {
        format!("{prefix}│   ")
    };

    for (i, child) in item.children.iter().enumerate() {
        push_item(child, &child_prefix, i == item.children.len() - 1, false, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(key: &str, label: &str, children: Vec<MenuItem>) -> MenuItem {
        MenuItem {
            key: key.into(),
            label: label.into(),
            icon: None,
            disabled: false,
            new_feature: false,
            order: None,
            children,
        }
    }

    #[test]
    fn test_tree_lines() {
        let mut chart = item("/components/chart", "Chart", vec![]);
        chart.new_feature = true;
        let menu = vec![
            item("/dashboard", "Dashboard", vec![
                item("/dashboard/workbench", "Workbench", vec![]),
                item("/dashboard/analysis", "Analysis", vec![]),
            ]),
            item("/components", "Components", vec![chart]),
        ];

        assert_eq!(
            menu_tree_lines(&menu),
            vec![
                "Dashboard (/dashboard)",
                "├── Workbench (/dashboard/workbench)",
                "└── Analysis (/dashboard/analysis)",
                "Components (/components)",
                "└── Chart (/components/chart) [new]",
            ]
        );
    }
}
