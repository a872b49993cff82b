use anyhow::Result;

use crate::CliTest;

#[test]
fn test_passes_lists_execution_order() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("passes").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout, "inherit-doc (priority -200)\n");

    Ok(())
}
