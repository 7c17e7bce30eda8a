//! Static teaching material for each topic page.

use sensei_core::model::{TabContent, TopicId};

/// What a topic page shows under one tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabBody {
    /// Interactive exercises driving the topic's actions.
    Exercises,
    /// Markdown rendered through the sanitizer.
    Markdown(&'static str),
}

#[must_use]
pub fn topic_tabs(topic: TopicId) -> TabContent<TabBody> {
    let (info, code) = material(topic);
    TabContent::new(
        TabBody::Exercises,
        TabBody::Markdown(info),
        TabBody::Markdown(code),
    )
}

#[must_use]
pub fn learning_objectives(topic: TopicId) -> &'static [&'static str] {
    match topic {
        TopicId::Locators => &[
            "Identify elements by id, class, name and tag",
            "Write CSS selectors and XPath expressions",
        ],
        TopicId::RelativeLocators => &["Find elements by their position relative to an anchor"],
        TopicId::ShadowDom => &["Reach into a shadow root and interact with its content"],
        TopicId::Tables => &[
            "Read and sort tabular data",
            "Edit, update and delete rows",
        ],
        TopicId::Forms => &["Drive every common form control"],
        TopicId::Calendar => &["Pick dates and move between months"],
        TopicId::Slider => &["Set a slider to a target value"],
        TopicId::Alerts => &["Accept, dismiss and answer browser dialogs"],
        TopicId::KeyboardActions => &["Send modifier keys, shortcuts and key sequences"],
        TopicId::MouseActions => &["Perform clicks, double clicks, context clicks and drags"],
        TopicId::Hover => &["Reveal content that only appears on hover"],
        TopicId::DragDrop => &["Reorder items with drag and drop"],
        TopicId::FileUpload => &["Upload files and handle an empty selection"],
        TopicId::DownloadFile => &["Trigger downloads and verify failures"],
        TopicId::BrokenImage => &["Tell loaded images from broken ones"],
        TopicId::Waits => &["Synchronise tests with content that loads late"],
        TopicId::Windows => &["Open new windows and switch between handles"],
        TopicId::Iframes => &["Switch into frames and back out again"],
        TopicId::EndToEnd => &["Combine every technique in one realistic flow"],
    }
}

fn material(topic: TopicId) -> (&'static str, &'static str) {
    match topic {
        TopicId::Locators => (
            "## Core locator strategies\n\n\
             - **ID**: most efficient and preferred locator\n\
             - **Class Name**: for elements with shared classes\n\
             - **CSS Selectors**: flexible element targeting\n\
             - **XPath**: powerful XML path queries\n\n\
             ### Best practices\n\n\
             - Prefer stable, unique identifiers\n\
             - Avoid overly complex XPath expressions\n",
            "```java\n\
             WebElement byId = driver.findElement(By.id(\"test-id\"));\n\
             WebElement byClass = driver.findElement(By.className(\"test-class\"));\n\
             WebElement byCss = driver.findElement(By.cssSelector(\"input[name='test-name']\"));\n\
             WebElement byXpath = driver.findElement(By.xpath(\"//div[@data-testid='test-xpath']\"));\n\
             ```\n",
        ),
        TopicId::RelativeLocators => (
            "## Relative locators\n\n\
             Selenium 4 can locate an element by where it sits next to another one: \
             `above`, `below`, `toLeftOf`, `toRightOf` and `near`.\n",
            "```java\n\
             WebElement anchor = driver.findElement(By.id(\"center\"));\n\
             WebElement above = driver.findElement(with(By.tagName(\"button\")).above(anchor));\n\
             WebElement near = driver.findElement(with(By.tagName(\"button\")).near(anchor));\n\
             ```\n",
        ),
        TopicId::ShadowDom => (
            "## Shadow DOM\n\n\
             Elements inside a shadow root are invisible to ordinary locators. \
             Fetch the host, open its shadow root, then search inside it.\n",
            "```java\n\
             SearchContext root = driver.findElement(By.id(\"host\")).getShadowRoot();\n\
             root.findElement(By.cssSelector(\"button\")).click();\n\
             ```\n",
        ),
        TopicId::Tables => (
            "## Working with tables\n\n\
             Locate rows with `tbody tr`, then read cells by column index. \
             Re-read the rows after sorting or deleting, the old references go stale.\n",
            "```java\n\
             List<WebElement> rows = driver.findElements(By.cssSelector(\"tbody tr\"));\n\
             String email = rows.get(0).findElements(By.tagName(\"td\")).get(2).getText();\n\
             driver.findElement(By.xpath(\"//th[text()='Name']\")).click();\n\
             ```\n",
        ),
        TopicId::Forms => (
            "## Form controls\n\n\
             Text inputs take `sendKeys`, dropdowns use the `Select` helper, \
             checkboxes and radios are clicked and verified with `isSelected`.\n",
            "```java\n\
             driver.findElement(By.name(\"username\")).sendKeys(\"sensei\");\n\
             new Select(driver.findElement(By.id(\"country\"))).selectByVisibleText(\"Egypt\");\n\
             WebElement terms = driver.findElement(By.id(\"terms\"));\n\
             if (!terms.isSelected()) terms.click();\n\
             ```\n",
        ),
        TopicId::Calendar => (
            "## Date pickers\n\n\
             Either type the date straight into the input or open the picker and \
             navigate month by month until the target day is visible.\n",
            "```java\n\
             driver.findElement(By.id(\"date\")).sendKeys(\"2024-12-25\");\n\
             driver.findElement(By.cssSelector(\".next-month\")).click();\n\
             ```\n",
        ),
        TopicId::Slider => (
            "## Sliders\n\n\
             Drag the handle by an offset with `Actions`, or send arrow keys for \
             exact steps.\n",
            "```java\n\
             WebElement slider = driver.findElement(By.id(\"slider\"));\n\
             new Actions(driver).dragAndDropBy(slider, 50, 0).perform();\n\
             slider.sendKeys(Keys.ARROW_RIGHT);\n\
             ```\n",
        ),
        TopicId::Alerts => (
            "## Browser dialogs\n\n\
             `alert`, `confirm` and `prompt` block the page until handled. Switch \
             to the alert, then accept, dismiss or type into it.\n",
            "```java\n\
             Alert alert = driver.switchTo().alert();\n\
             alert.sendKeys(\"Sensei\");\n\
             alert.accept();\n\
             ```\n",
        ),
        TopicId::KeyboardActions => (
            "## Keyboard actions\n\n\
             Hold modifiers with `keyDown`/`keyUp` and chain key presses into one \
             sequence.\n",
            "```java\n\
             new Actions(driver)\n\
             \x20   .keyDown(Keys.CONTROL).sendKeys(\"a\").keyUp(Keys.CONTROL)\n\
             \x20   .perform();\n\
             ```\n",
        ),
        TopicId::MouseActions => (
            "## Mouse actions\n\n\
             The `Actions` API covers `click`, `doubleClick`, `contextClick`, \
             `moveToElement` and `dragAndDrop`.\n",
            "```java\n\
             Actions actions = new Actions(driver);\n\
             actions.doubleClick(target).perform();\n\
             actions.contextClick(target).perform();\n\
             ```\n",
        ),
        TopicId::Hover => (
            "## Hover\n\n\
             Move the pointer over an element to reveal tooltips and menus, then \
             assert on the revealed content.\n",
            "```java\n\
             new Actions(driver).moveToElement(driver.findElement(By.id(\"item-1\"))).perform();\n\
             ```\n",
        ),
        TopicId::DragDrop => (
            "## Drag and drop\n\n\
             Use `dragAndDrop(source, target)`; for HTML5 lists that ignore it, \
             fall back to `clickAndHold`, `moveToElement` and `release`.\n",
            "```java\n\
             new Actions(driver).dragAndDrop(source, target).perform();\n\
             ```\n",
        ),
        TopicId::FileUpload => (
            "## File upload\n\n\
             Send an absolute path to the `input[type=file]` element, no dialog \
             interaction needed.\n",
            "```java\n\
             driver.findElement(By.id(\"file\")).sendKeys(\"/tmp/report.pdf\");\n\
             driver.findElement(By.id(\"upload\")).click();\n\
             ```\n",
        ),
        TopicId::DownloadFile => (
            "## Downloads\n\n\
             Point the browser at a known download directory, trigger the \
             download, then poll the directory for the file.\n",
            "```java\n\
             ChromeOptions options = new ChromeOptions();\n\
             options.setExperimentalOption(\"prefs\", Map.of(\"download.default_directory\", dir));\n\
             ```\n",
        ),
        TopicId::BrokenImage => (
            "## Broken images\n\n\
             An image that failed to load reports `naturalWidth` of zero.\n",
            "```java\n\
             Long width = (Long) ((JavascriptExecutor) driver)\n\
             \x20   .executeScript(\"return arguments[0].naturalWidth\", image);\n\
             ```\n",
        ),
        TopicId::Waits => (
            "## Waits\n\n\
             Prefer explicit waits on a condition over fixed sleeps.\n",
            "```java\n\
             new WebDriverWait(driver, Duration.ofSeconds(10))\n\
             \x20   .until(ExpectedConditions.visibilityOfElementLocated(By.id(\"content\")));\n\
             ```\n",
        ),
        TopicId::Windows => (
            "## Windows and tabs\n\n\
             Every window has a handle. Store the original one, switch to the new \
             handle, and switch back when done.\n",
            "```java\n\
             String original = driver.getWindowHandle();\n\
             for (String handle : driver.getWindowHandles()) {\n\
             \x20   if (!handle.equals(original)) driver.switchTo().window(handle);\n\
             }\n\
             ```\n",
        ),
        TopicId::Iframes => (
            "## Frames\n\n\
             Switch into a frame by index, name or element before locating its \
             content, then return with `defaultContent`.\n",
            "```java\n\
             driver.switchTo().frame(\"frame1\");\n\
             driver.switchTo().defaultContent();\n\
             ```\n",
        ),
        TopicId::EndToEnd => (
            "## End-to-end scenario\n\n\
             Register, book a date, arrange preferences, read the terms, confirm \
             and preview. Each step reuses a technique from an earlier topic.\n",
            "```java\n\
             registrationPage.fill(user);\n\
             calendarPage.pick(LocalDate.now().plusDays(7));\n\
             driver.switchTo().alert().accept();\n\
             ```\n",
        ),
    }
}
