//! List rules command implementation.

use tpl_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    let rules = all_rules();

    println!("Available rules:\n");
    println!("{:<10} {:<48} Description", "Code", "Name");
    println!("{}", "-".repeat(100));

    for rule in &rules.template_rules {
        println!(
            "{:<10} {:<48} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }
    for rule in &rules.directive_rules {
        println!(
            "{:<10} {:<48} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nPresets:");
    println!("  recommended  - TL001-TL010, TL013 (default)");
    println!("  strict       - All rules, selector conventions included");
    println!("  minimal      - TL004, TL005, TL007 (for gradual adoption)");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  tpl-lint check --rules no-autofocus,valid-aria");
    println!("  tpl-lint check --rules TL001,TL002,TL010");
}
